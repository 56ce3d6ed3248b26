use std::fmt::Write;

use prayer_core::AppViewModel;

pub(crate) const LOADING_TEXT: &str = "Loading prayer times...";
pub(crate) const HEADING: &str = "Prayer Times";

pub(crate) fn render(view: &AppViewModel) -> String {
    match view {
        AppViewModel::Loading => LOADING_TEXT.to_string(),
        AppViewModel::Error(message) => message.clone(),
        AppViewModel::Times(rows) => {
            let mut out = String::from(HEADING);
            for row in rows {
                let _ = write!(out, "\n{}: {}", row.prayer, row.time);
            }
            out
        }
    }
}
