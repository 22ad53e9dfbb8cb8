//! Cell styling: colors and SGR attribute flags.
//!
//! A [`Style`] is the value of the screen's "current style" register at the
//! moment a cell is written. It is small and compared by value, so the HTML
//! serializer can coalesce adjacent cells into runs with a plain `==`.

use bitflags::bitflags;

bitflags! {
    /// SGR text attribute flags.
    ///
    /// Each flag corresponds to one ECMA-48 SGR parameter; the mapping back
    /// to the numeric code is [`StyleFlags::ORDERED`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const BLINK         = 1 << 4;
        const INVERSE       = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

impl StyleFlags {
    /// Flags paired with their SGR set-codes, in ascending code order.
    ///
    /// Serialization emits attribute classes in this order, so the pairing
    /// doubles as the canonical ordering.
    pub const ORDERED: [(StyleFlags, u8); 7] = [
        (StyleFlags::BOLD, 1),
        (StyleFlags::DIM, 2),
        (StyleFlags::ITALIC, 3),
        (StyleFlags::UNDERLINE, 4),
        (StyleFlags::BLINK, 5),
        (StyleFlags::INVERSE, 7),
        (StyleFlags::STRIKETHROUGH, 9),
    ];
}

/// Color of a cell's foreground or background.
///
/// Standard colors keep the raw SGR code that selected them (30-37/90-97
/// for foregrounds, 40-47/100-107 for backgrounds) because the serializer
/// emits that code verbatim in its class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default (SGR 39 / SGR 49).
    #[default]
    Default,
    /// Standard color, identified by its raw SGR code.
    Standard(u8),
    /// 256-color palette index (`38;5;N` / `48;5;N`).
    Indexed(u8),
}

/// Display attributes active at a cell: foreground, background, flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub flags: StyleFlags,
}

impl Style {
    /// True iff every field is at its default (an SGR 0 state).
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg == Color::Default && self.bg == Color::Default && self.flags.is_empty()
    }

    /// Reset all attributes to default (SGR 0).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a full SGR parameter list, left to right.
    ///
    /// An empty list is equivalent to a single `0` (reset). Unrecognized
    /// codes are skipped without derailing the rest of the run, so
    /// `0;30;42` applies the reset, the foreground and the background.
    pub fn apply_sgr(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.reset();
            return;
        }

        let mut i = 0;
        while i < params.len() {
            let param = params[i];
            i += 1;
            match param {
                0 => self.reset(),
                1 => self.flags |= StyleFlags::BOLD,
                2 => self.flags |= StyleFlags::DIM,
                3 => self.flags |= StyleFlags::ITALIC,
                4 => self.flags |= StyleFlags::UNDERLINE,
                5 => self.flags |= StyleFlags::BLINK,
                7 => self.flags |= StyleFlags::INVERSE,
                9 => self.flags |= StyleFlags::STRIKETHROUGH,
                21 | 22 => self.flags -= StyleFlags::BOLD | StyleFlags::DIM,
                23 => self.flags -= StyleFlags::ITALIC,
                24 => self.flags -= StyleFlags::UNDERLINE,
                25 => self.flags -= StyleFlags::BLINK,
                27 => self.flags -= StyleFlags::INVERSE,
                29 => self.flags -= StyleFlags::STRIKETHROUGH,
                30..=37 | 90..=97 => self.fg = Color::Standard(param as u8),
                39 => self.fg = Color::Default,
                40..=47 | 100..=107 => self.bg = Color::Standard(param as u8),
                49 => self.bg = Color::Default,
                38 => i = self.apply_extended_color(params, i, true),
                48 => i = self.apply_extended_color(params, i, false),
                _ => {}
            }
        }
    }

    /// Consume the sub-parameters of an extended color (code 38 or 48).
    ///
    /// Mode 5 selects a 256-color index. Mode 2 is truecolor, which this
    /// model does not represent; its three components are still consumed so
    /// they cannot be misread as free-standing SGR codes. Returns the index
    /// of the next unconsumed parameter.
    fn apply_extended_color(&mut self, params: &[u16], mut i: usize, foreground: bool) -> usize {
        let Some(&mode) = params.get(i) else {
            return i;
        };
        i += 1;
        match mode {
            5 => {
                if let Some(&index) = params.get(i) {
                    i += 1;
                    // Out-of-range palette indexes select nothing.
                    if let Ok(index) = u8::try_from(index) {
                        if foreground {
                            self.fg = Color::Indexed(index);
                        } else {
                            self.bg = Color::Indexed(index);
                        }
                    }
                }
                i
            }
            2 => (i + 3).min(params.len()),
            _ => i,
        }
    }
}
