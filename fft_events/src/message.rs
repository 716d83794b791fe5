use serde::Serialize;

/// Byte that ends every dialogue message.
pub const MESSAGE_TERMINATOR: u8 = 0xFE;

const SPACE: u8 = 0xFA;
const NEWLINE: u8 = 0xF8;

/// One terminated dialogue string from an event's text region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Offset of the first byte within the event block.
    pub offset: usize,
    /// Raw bytes, terminator excluded.
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub text: String,
}

/// Split `region` on message terminators. Bytes after the last terminator
/// are padding and produce no message.
pub fn read_messages(region: &[u8], base_offset: usize) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut start = 0;
    for (index, byte) in region.iter().enumerate() {
        if *byte != MESSAGE_TERMINATOR {
            continue;
        }
        let bytes = region[start..index].to_vec();
        messages.push(Message {
            offset: base_offset + start,
            text: render_text(&bytes),
            bytes,
        });
        start = index + 1;
    }
    messages
}

/// Best-effort rendering of the game's character set. Control codes and
/// glyphs outside digits and Latin letters render as `{xx}`.
pub fn render_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            0x00..=0x09 => text.push(char::from(b'0' + byte)),
            0x0A..=0x23 => text.push(char::from(b'A' + (byte - 0x0A))),
            0x24..=0x3D => text.push(char::from(b'a' + (byte - 0x24))),
            SPACE => text.push(' '),
            NEWLINE => text.push('\n'),
            other => text.push_str(&format!("{{{other:02x}}}")),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_glyphs() {
        let bytes = [0x11, 0x28, 0x2F, 0x2F, 0x32, SPACE, 0x01, 0x09, NEWLINE, 0xE0];
        assert_eq!(render_text(&bytes), "Hello 19\n{e0}");
        assert_eq!(render_text(&[0x0A, 0x23, 0x24, 0x3D]), "AZaz");
    }

    #[test]
    fn splits_on_terminator_and_drops_tail() {
        let end = MESSAGE_TERMINATOR;
        let region = [0x0A, end, end, 0x0B, 0x0C, end, 0x00, 0x00];
        let messages = read_messages(&region, 100);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].offset, 100);
        assert_eq!(messages[0].text, "A");
        assert!(messages[1].bytes.is_empty());
        assert_eq!(messages[2].offset, 103);
        assert_eq!(messages[2].bytes, vec![0x0B, 0x0C]);
        assert_eq!(messages[2].text, "BC");
    }

    #[test]
    fn unterminated_region_has_no_messages() {
        assert!(read_messages(&[0x0A, 0x0B], 0).is_empty());
    }
}
