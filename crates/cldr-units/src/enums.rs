//! Core enumerations shared by the generator and the runtime resolver
//!
//! The discriminant values are part of the binary blob format and must never
//! be reordered without regenerating every persisted blob.

/// Presentation length of a unit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PluralFormLength {
    /// The full, spelled-out form of the unit, e.g. "kilometers".
    Long = 0,
    /// A common abbreviation, e.g. "km".
    Short = 1,
    /// The most compact representation, often a single glyph.
    Narrow = 2,
}

impl PluralFormLength {
    /// All lengths in discriminant order.
    pub const ALL: [Self; 3] = [Self::Long, Self::Short, Self::Narrow];

    /// Wire-format byte for this length.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a wire-format byte back into a length.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Long),
            1 => Some(Self::Short),
            2 => Some(Self::Narrow),
            _ => None,
        }
    }

    /// Resolution order for this length: itself first, then the lengths
    /// borrowed from when it has no data.
    ///
    /// Long prefers Short over Narrow; Short and Narrow both prefer the
    /// other non-Long length before falling back to Long.
    pub fn fallback_chain(self) -> [Self; 3] {
        match self {
            Self::Long => [Self::Long, Self::Short, Self::Narrow],
            Self::Short => [Self::Short, Self::Narrow, Self::Long],
            Self::Narrow => [Self::Narrow, Self::Short, Self::Long],
        }
    }
}

/// Grammatical case of a unit pattern.
///
/// `None` is the unmarked case used for languages without case morphology
/// and as the shared fallback target for every marked case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GrammaticalCase {
    /// Absence of a grammatical case, or an undefined case.
    None = 0,
    /// Marks the direct object of a verb.
    Accusative = 1,
    /// Marks the indirect object of a verb.
    Dative = 2,
    /// Indicates possession or relationship.
    Genitive = 3,
    /// Indicates the means or instrument used.
    Instrumental = 4,
    /// Denotes a location or place.
    Locative = 5,
    /// Indicates movement out of or from something.
    Elative = 6,
    /// Indicates movement into something.
    Illative = 7,
    /// Denotes an indefinite or partial quantity.
    Partitive = 8,
    /// General term for non-nominative cases; used when no specific case is
    /// determined.
    Oblique = 9,
    /// Indicates an endpoint or limit of an action.
    Terminative = 10,
    /// Denotes a change of state or transformation.
    Translative = 11,
    /// Indicates movement away from something.
    Ablative = 12,
    /// Denotes accompaniment or association.
    Sociative = 13,
    /// Marks the subject of a transitive verb in ergative languages.
    Ergative = 14,
    /// Used for direct address.
    Vocative = 15,
    /// Used exclusively with certain prepositions.
    Prepositional = 16,
}

impl GrammaticalCase {
    /// Number of grammatical cases, including `None`.
    pub const COUNT: usize = 17;

    /// All cases in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::None,
        Self::Accusative,
        Self::Dative,
        Self::Genitive,
        Self::Instrumental,
        Self::Locative,
        Self::Elative,
        Self::Illative,
        Self::Partitive,
        Self::Oblique,
        Self::Terminative,
        Self::Translative,
        Self::Ablative,
        Self::Sociative,
        Self::Ergative,
        Self::Vocative,
        Self::Prepositional,
    ];

    /// Wire-format byte for this case.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Slot index for case-keyed containers.
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Parse a wire-format byte back into a case.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(byte as usize).copied()
    }

    /// Resolution order for this case.
    ///
    /// Every marked case falls back to the unmarked `None` case first and to
    /// `Oblique` last; `None` and `Oblique` each fall back to the other.
    /// Duplicate chain entries are harmless, lookups take the first existing
    /// node.
    pub fn fallback_chain(self) -> [Self; 3] {
        match self {
            Self::None => [Self::None, Self::Oblique, Self::Oblique],
            Self::Oblique => [Self::Oblique, Self::None, Self::None],
            other => [other, Self::None, Self::Oblique],
        }
    }
}

/// Plural category of a quantity, as defined by CLDR.
///
/// The discriminant order doubles as the tie-break order used when the
/// generator synthesizes ultimate-fallback patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PluralCategory {
    /// Catch-all category; present for every case that has any data.
    Other = 0,
    /// Singular form, usually exactly 1.
    One = 1,
    /// Distinct form for zero in some languages.
    Zero = 2,
    /// Dual form, e.g. Arabic or Slovenian.
    Two = 3,
    /// Small quantities, language dependent.
    Few = 4,
    /// Large quantities, language dependent.
    Many = 5,
}

impl PluralCategory {
    /// All categories in discriminant order.
    pub const ALL: [Self; 6] = [
        Self::Other,
        Self::One,
        Self::Zero,
        Self::Two,
        Self::Few,
        Self::Many,
    ];

    /// Wire-format byte for this category.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a wire-format byte back into a category.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(byte as usize).copied()
    }
}

/// Grammatical gender of a unit in a particular language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnitGender {
    /// Feminine gender, e.g. French "heure".
    Feminine = 0,
    /// Masculine gender, e.g. French "kilomètre".
    Masculine = 1,
    /// Inanimate, for languages that mark animacy.
    Inanimate = 2,
    /// Neuter gender, e.g. German "Kilogramm".
    Neuter = 3,
    /// Common gender, e.g. Swedish "meter".
    Common = 4,
    /// No gender information available. Never persisted; runtime queries
    /// resolve absent data to this value.
    Unknown = 5,
}

impl UnitGender {
    /// Wire-format byte for this gender.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a wire-format byte back into a gender.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Feminine),
            1 => Some(Self::Masculine),
            2 => Some(Self::Inanimate),
            3 => Some(Self::Neuter),
            4 => Some(Self::Common),
            5 => Some(Self::Unknown),
            _ => None,
        }
    }
}
