use std::fs;
use std::io::{self, Read};

/// Read a description from a file, or from stdin when the path is "-"
pub fn read_description(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    fs::read_to_string(path)
}

/// Write the rewritten description back to its source file (--in-place),
/// or print it to stdout with a closing newline.
pub fn write_description(path: &str, contents: &str, in_place: bool) -> io::Result<()> {
    if in_place {
        if path == "-" {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot write in place when reading from stdin",
            ));
        }
        return fs::write(path, contents);
    }

    print!("{}", contents);
    if !contents.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_description_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desc.txt");
        fs::write(&path, "Convoy tracking 2 issues\n").unwrap();

        let got = read_description(path.to_str().unwrap()).unwrap();
        assert_eq!(got, "Convoy tracking 2 issues\n");
    }

    #[test]
    fn test_read_description_missing_file() {
        assert!(read_description("/no/such/description.txt").is_err());
    }

    #[test]
    fn test_write_description_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desc.txt");
        fs::write(&path, "old").unwrap();

        write_description(path.to_str().unwrap(), "new contents", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
    }

    #[test]
    fn test_write_description_in_place_stdin_rejected() {
        let result = write_description("-", "contents", true);
        assert!(result.is_err());
    }
}
