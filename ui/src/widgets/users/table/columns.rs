//! Column sizes for the users table.

use roster_business::UserColumn;

/// Profile pictures are drawn as 64px circles.
pub const AVATAR_SIZE: f32 = 64.0;
pub const TEXT_MIN_WIDTH: f32 = 80.0;
pub const ACTIONS_WIDTH: f32 = 120.0;
pub const COLUMN_SPACING: [f32; 2] = [16.0, 0.0];

/// Minimum width of `column`.
#[inline]
pub fn min_width(column: UserColumn) -> f32 {
    match column {
        UserColumn::Avatar => AVATAR_SIZE,
        UserColumn::Actions => ACTIONS_WIDTH,
        UserColumn::FirstName
        | UserColumn::LastName
        | UserColumn::Email
        | UserColumn::Company => TEXT_MIN_WIDTH,
    }
}
