use color_eyre::eyre::Result;

use super::Member;

/// Produces the fixed-layout membership card for a paid member as an
/// in-memory byte buffer. Rendering is a pure function of the member fields.
pub trait CardRenderer {
    fn render(&self, member: &Member) -> Result<Vec<u8>>;
}
