use std::io;

use crate::convoy::subscribers::{extract_subscribers, update_subscribers};
use crate::utils::io::{read_description, write_description};

pub fn run(path: &str, subscribers: &[String], in_place: bool) -> io::Result<()> {
    let description = read_description(path)?;

    // 1. Read the current list
    let mut current = extract_subscribers(&description);

    // 2. Drop every occurrence of the given tokens
    current.retain(|subscriber| !subscribers.contains(subscriber));

    // 3. Rewrite the metadata line
    let updated = update_subscribers(&description, &current);
    write_description(path, &updated, in_place)
}
