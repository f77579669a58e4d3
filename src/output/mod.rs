// Output formatting — terminal display and the persisted report.

pub mod report;
pub mod terminal;

/// Shorten a document path to at most `max_chars` characters by dropping
/// leading characters, so the file name at the end stays visible.
///
/// Works on characters rather than bytes; paths with accented letters never
/// split mid-character.
pub fn shorten_path(name: &str, max_chars: usize) -> String {
    let char_count = name.chars().count();
    if char_count <= max_chars {
        name.to_string()
    } else {
        let tail: String = name.chars().skip(char_count - max_chars).collect();
        format!("...{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_unchanged() {
        assert_eq!(shorten_path("books/part1.txt", 20), "books/part1.txt");
    }

    #[test]
    fn test_long_path_keeps_file_name() {
        let shortened = shorten_path("/home/reader/library/melancholy/part1.txt", 12);
        assert_eq!(shortened, "...ly/part1.txt");
    }

    #[test]
    fn test_multibyte_path() {
        assert_eq!(shorten_path("éèêë.txt", 5), "...ë.txt");
    }
}
