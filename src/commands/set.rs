use std::io;

use crate::convoy::subscribers::update_subscribers;
use crate::utils::io::{read_description, write_description};

pub fn run(path: &str, subscribers: &[String], in_place: bool) -> io::Result<()> {
    let description = read_description(path)?;
    let updated = update_subscribers(&description, subscribers);
    write_description(path, &updated, in_place)
}
