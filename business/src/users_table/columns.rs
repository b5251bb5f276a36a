//! Column definitions for the users table.

use crate::user::User;

/// Message shown in place of rows when the table is empty.
pub const EMPTY_MESSAGE: &str = "No results.";

/// The fixed set of columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserColumn {
    Avatar,
    FirstName,
    LastName,
    Email,
    Company,
    Actions,
}

/// What a cell should show. Borrowed from the row so rendering never clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent<'a> {
    /// Round profile picture; `alt` is the user's email.
    Avatar { url: &'a str, alt: &'a str },
    Text(&'a str),
    /// Edit/delete controls for the row.
    Actions,
    Empty,
}

impl UserColumn {
    pub const ALL: [Self; 6] = [
        Self::Avatar,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Company,
        Self::Actions,
    ];

    /// Number of columns; the empty-table message spans all of them.
    pub const COUNT: usize = Self::ALL.len();

    /// Wire key of the field backing the column.
    pub fn key(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Actions => "actions",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Self::Avatar => "Profile",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Actions => "",
        }
    }

    pub fn cell(self, user: &User) -> CellContent<'_> {
        match self {
            Self::Avatar => match user.avatar.as_deref() {
                Some(url) => CellContent::Avatar {
                    url,
                    alt: &user.email,
                },
                None => CellContent::Empty,
            },
            Self::FirstName => CellContent::Text(&user.first_name),
            Self::LastName => CellContent::Text(&user.last_name),
            Self::Email => CellContent::Text(&user.email),
            Self::Company => CellContent::Text(&user.company),
            Self::Actions => CellContent::Actions,
        }
    }
}

/// Maps a user to one cell per column, in column order.
pub fn render_row(user: &User) -> [CellContent<'_>; UserColumn::COUNT] {
    UserColumn::ALL.map(|column| column.cell(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;

    fn user(avatar: Option<&str>) -> User {
        User {
            id: UserId::from(1),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            avatar: avatar.map(str::to_owned),
            company: "Engines".to_owned(),
        }
    }

    #[test]
    fn test_headers_in_order() {
        let headers: Vec<_> = UserColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            vec!["Profile", "First Name", "Last Name", "Email", "Company", ""]
        );
    }

    #[test]
    fn test_keys_match_wire_format() {
        let keys: Vec<_> = UserColumn::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["avatar", "FirstName", "LastName", "Email", "Company", "actions"]
        );
    }

    #[test]
    fn test_render_row_with_avatar() {
        let user = user(Some("https://example.com/ada.png"));
        let cells = render_row(&user);

        assert_eq!(
            cells,
            [
                CellContent::Avatar {
                    url: "https://example.com/ada.png",
                    alt: "ada@example.com"
                },
                CellContent::Text("Ada"),
                CellContent::Text("Lovelace"),
                CellContent::Text("ada@example.com"),
                CellContent::Text("Engines"),
                CellContent::Actions,
            ]
        );
    }

    #[test]
    fn test_missing_avatar_renders_nothing() {
        let user = user(None);
        assert_eq!(UserColumn::Avatar.cell(&user), CellContent::Empty);
    }
}
