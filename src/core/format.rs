//! Line formatter for show-tabs and show-ends

use super::flags::EffectiveFlags;

/// Visible form of a TAB character
pub const TAB_MARKER: &[u8] = b"^I";

/// Marker appended at the end of each line
pub const END_MARKER: u8 = b'$';

/// Append the rendered form of `line` to `out`
///
/// Tabs are replaced first; the end marker is always the last byte written.
pub fn render_into(line: &[u8], flags: &EffectiveFlags, out: &mut Vec<u8>) {
    if flags.show_tabs {
        for (i, chunk) in line.split(|&b| b == b'\t').enumerate() {
            if i > 0 {
                out.extend_from_slice(TAB_MARKER);
            }
            out.extend_from_slice(chunk);
        }
    } else {
        out.extend_from_slice(line);
    }

    if flags.show_ends {
        out.push(END_MARKER);
    }
}

/// Render a single line
pub fn render(line: &[u8], flags: &EffectiveFlags) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len() + 1);
    render_into(line, flags, &mut out);
    out
}
