//! Carves the terminal into the storefront's mount points.

use crate::errors::{AppError, AppResult};
use crate::ui::constants::{
    CART_TOTAL_HEIGHT, CART_WIDTH, MIN_HEIGHT, MIN_WIDTH, SIDEBAR_WIDTH, STATUS_HEIGHT,
};
use ratatui::layout::{Constraint, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mounts {
    /// Everything above the status line.
    pub body: Rect,
    pub categories: Rect,
    /// Also hosts the loading indicator, which replaces the cards while shown.
    pub grid: Rect,
    pub cart_list: Rect,
    pub cart_total: Rect,
    pub status: Rect,
}

impl Mounts {
    /// `None` when the area cannot host the category list and the grid.
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]).areas(area);
        let [categories, grid, cart] = Layout::horizontal([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(0),
            Constraint::Length(CART_WIDTH),
        ])
        .areas(body);
        let [cart_list, cart_total] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(CART_TOTAL_HEIGHT)])
                .areas(cart);

        Some(Self {
            body,
            categories,
            grid,
            cart_list,
            cart_total,
            status,
        })
    }

    /// Startup check: the storefront cannot mount into a smaller terminal.
    pub fn require(width: u16, height: u16) -> AppResult<()> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(AppError::MountUnavailable {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        Ok(())
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
