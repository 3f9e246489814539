use core::{
    ffi::CStr,
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

use bstr::BStr;

/// How an attribute's value is rendered and parsed by schema codecs.
///
/// The low three bits select a value *type*. The bits under
/// [`FLAGS_MASK`](Self::FLAGS_MASK) are independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormattingMode(i32);

impl FormattingMode {
    /// No explicit formatting.
    pub const DEFAULT: Self = Self(0x0);
    /// Decimal.
    pub const DEC: Self = Self(0x1);
    /// Hexadecimal.
    pub const HEX: Self = Self(0x2);
    /// Base64.
    pub const BASE64: Self = Self(0x3);
    /// Plain text.
    pub const TEXT: Self = Self(0x4);
    /// Mask for the type bits.
    pub const TYPE_MASK: Self = Self(0x7);

    /// Element content is not wrapped in a tag.
    pub const UNTAGGED: Self = Self(0x1_0000);
    /// Encoded as an attribute rather than an element.
    pub const ATTRIBUTE: Self = Self(0x2_0000);
    /// Encoded as the simple content of the enclosing element.
    pub const SIMPLE_CONTENT: Self = Self(0x4_0000);
    /// The value may be explicitly nil.
    pub const NILLABLE: Self = Self(0x8_0000);
    /// Whitespace-separated list.
    pub const LIST: Self = Self(0x10_0000);
    /// The attribute has a default value.
    pub const DEFAULT_VALUE: Self = Self(0x20_0000);
    /// Mask for the flag bits.
    pub const FLAGS_MASK: Self = Self(0x3F_0000);

    const TYPE_NAMES: [(Self, &'static str); 5] = [
        (Self::DEFAULT, "DEFAULT"),
        (Self::DEC, "DEC"),
        (Self::HEX, "HEX"),
        (Self::BASE64, "BASE64"),
        (Self::TEXT, "TEXT"),
    ];

    const FLAG_NAMES: [(Self, &'static str); 6] = [
        (Self::UNTAGGED, "UNTAGGED"),
        (Self::ATTRIBUTE, "ATTRIBUTE"),
        (Self::SIMPLE_CONTENT, "SIMPLE_CONTENT"),
        (Self::NILLABLE, "NILLABLE"),
        (Self::LIST, "LIST"),
        (Self::DEFAULT_VALUE, "DEFAULT_VALUE"),
    ];

    /// Wrap raw bits, keeping unknown ones.
    #[must_use]
    pub const fn from_bits_retain(bits: i32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    #[must_use]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Only the type bits.
    #[must_use]
    pub const fn type_bits(self) -> Self {
        Self(self.0 & Self::TYPE_MASK.0)
    }

    /// Only the flag bits.
    #[must_use]
    pub const fn flag_bits(self) -> Self {
        Self(self.0 & Self::FLAGS_MASK.0)
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FormattingMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormattingMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FormattingMode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<i32> for FormattingMode {
    fn from(bits: i32) -> Self {
        Self(bits)
    }
}

impl From<FormattingMode> for i32 {
    fn from(mode: FormattingMode) -> Self {
        mode.0
    }
}

/// Renders as `TYPE|FLAG|...`, e.g. `DEC|NILLABLE`. Bits with no name are
/// appended as one hex literal.
impl fmt::Display for FormattingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut unknown = self.0 & !(Self::TYPE_MASK.0 | Self::FLAGS_MASK.0);
        let mut sep = "";

        match Self::TYPE_NAMES
            .iter()
            .find(|(mode, _)| *mode == self.type_bits())
        {
            Some((_, name)) => {
                f.write_str(name)?;
                sep = "|";
            }
            None => unknown |= self.type_bits().0,
        }

        for (flag, name) in Self::FLAG_NAMES {
            if self.contains(flag) {
                write!(f, "{sep}{name}")?;
                sep = "|";
            }
        }

        if unknown != 0 {
            write!(f, "{sep}{unknown:#x}")?;
        }
        Ok(())
    }
}

/// Describes one attribute of a sequence (record) type.
///
/// Descriptors are plain values meant for `const`/`static` tables emitted by
/// schema code generators:
///
/// ```rust
/// use fixedkit::{AttributeDescriptor, FormattingMode};
///
/// static ATTRIBUTES: [AttributeDescriptor<'static>; 2] = [
///     AttributeDescriptor::new(1, b"name", c"the account holder", FormattingMode::TEXT),
///     AttributeDescriptor::new(2, b"balance", c"", FormattingMode::DEC),
/// ];
///
/// assert_eq!(ATTRIBUTES[1].name_len(), 7);
/// ```
///
/// The name is a length-bounded byte string that need not be terminated. The
/// annotation is a C string. Both are borrowed and must outlive the
/// descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor<'a> {
    /// Distinct id of the attribute within its record type.
    pub id: i32,
    /// Attribute name.
    pub name: &'a [u8],
    /// Free-form annotation.
    pub annotation: &'a CStr,
    /// How the value is formatted.
    pub formatting_mode: FormattingMode,
}

impl<'a> AttributeDescriptor<'a> {
    /// Build a descriptor. Usable in `const` context.
    #[must_use]
    pub const fn new(
        id: i32,
        name: &'a [u8],
        annotation: &'a CStr,
        formatting_mode: FormattingMode,
    ) -> Self {
        Self {
            id,
            name,
            annotation,
            formatting_mode,
        }
    }

    /// Numeric identifier of the attribute.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Attribute name bytes, not terminated.
    #[must_use]
    pub const fn name(&self) -> &'a [u8] {
        self.name
    }

    /// Length of the name in bytes. No terminator is counted.
    #[must_use]
    pub const fn name_len(&self) -> usize {
        self.name.len()
    }

    /// Human-readable description.
    #[must_use]
    pub const fn annotation(&self) -> &'a CStr {
        self.annotation
    }

    /// Formatting hint for encoders.
    #[must_use]
    pub const fn formatting_mode(&self) -> FormattingMode {
        self.formatting_mode
    }

    /// Mutable identifier.
    pub fn id_mut(&mut self) -> &mut i32 {
        &mut self.id
    }

    /// The name and its length change together.
    pub fn name_mut(&mut self) -> &mut &'a [u8] {
        &mut self.name
    }

    /// Mutable annotation.
    pub fn annotation_mut(&mut self) -> &mut &'a CStr {
        &mut self.annotation
    }

    /// Mutable formatting mode.
    pub fn formatting_mode_mut(&mut self) -> &mut FormattingMode {
        &mut self.formatting_mode
    }
}

impl fmt::Display for AttributeDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "( {}, {}, {}, {}, {} )",
            self.id,
            BStr::new(self.name),
            self.name.len(),
            BStr::new(self.annotation.to_bytes()),
            self.formatting_mode,
        )
    }
}
