use std::io;

use crate::templates::render::message_names;
use crate::templates::{render_message, MessageData};

pub fn run(name: &str, data: &impl MessageData) -> io::Result<()> {
    let rendered = render_message(name, data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} (available messages: {})", e, message_names().join(", ")),
        )
    })?;

    print!("{}", rendered);
    Ok(())
}
