// fuzz/src/lib.rs
pub mod helpers {
    use std::io::Cursor;

    #[inline]
    pub fn cursor(data: &[u8]) -> Cursor<&[u8]> {
        Cursor::new(data)
    }

    #[inline]
    pub fn as_str(data: &[u8]) -> Option<&str> {
        std::str::from_utf8(data).ok()
    }

    /// Splits the input into an id and a raw message at the first NUL.
    pub fn id_and_message(data: &[u8]) -> Option<(&str, &str)> {
        let s = as_str(data)?;
        s.split_once('\0')
    }
}
