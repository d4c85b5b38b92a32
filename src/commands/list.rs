use std::io;

use crate::convoy::subscribers::{extract_subscribers, has_deprecated_line};
use crate::utils::io::read_description;

pub fn run(path: &str) -> io::Result<()> {
    let description = read_description(path)?;

    if has_deprecated_line(&description) {
        eprintln!(
            "warning: description uses the deprecated Notify: line; \
             the next update will rewrite it as Subscribers:"
        );
    }

    for subscriber in extract_subscribers(&description) {
        println!("{}", subscriber);
    }

    Ok(())
}
