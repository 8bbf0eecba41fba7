use crate::app::AppState;

pub fn dismiss_alert(app: &mut AppState) {
    app.dismiss_alert();
}
