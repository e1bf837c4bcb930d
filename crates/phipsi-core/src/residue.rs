//! Amino acid alphabet.
//!
//! The 20 canonical residues and their integer codes. Codes follow the order used
//! by the phipsi10882 dataset (`A R N D C Q E G H I L K M F P S T W Y V`), which is
//! NOT alphabetical. Models trained on one ordering cannot be fed the other.
use crate::{FeaturizeError, Result};
use strum::{Display, EnumIter};

/// Number of symbols in the alphabet and width of a one-hot residue vector.
pub const ALPHABET_SIZE: usize = 20;

macro_rules! define_amino_acids {
    ($($name:ident: $code3:literal, $code1:literal, $idx:literal),* $(,)?) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
        pub enum AminoAcid {
            $($name),*
        }

        impl AminoAcid {
            pub const fn code3(&self) -> &'static str {
                match self {
                    $(Self::$name => $code3),*
                }
            }
            pub const fn code1(&self) -> char {
                match self {
                    $(Self::$name => $code1),*
                }
            }
            /// Integer code in `[0, ALPHABET_SIZE)`.
            pub const fn code(&self) -> u8 {
                match self {
                    $(Self::$name => $idx),*
                }
            }
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($idx => Some(Self::$name),)*
                    _ => None,
                }
            }
            /// Encode a one-letter symbol. Only the 20 uppercase letters are accepted.
            pub fn encode(symbol: char) -> Result<Self> {
                match symbol {
                    $($code1 => Ok(Self::$name),)*
                    other => Err(FeaturizeError::UnknownResidue(other)),
                }
            }
        }
    }
}

#[rustfmt::skip]
define_amino_acids! {
    ALA: "ALA", 'A', 0,
    ARG: "ARG", 'R', 1,
    ASN: "ASN", 'N', 2,
    ASP: "ASP", 'D', 3,
    CYS: "CYS", 'C', 4,
    GLN: "GLN", 'Q', 5,
    GLU: "GLU", 'E', 6,
    GLY: "GLY", 'G', 7,
    HIS: "HIS", 'H', 8,
    ILE: "ILE", 'I', 9,
    LEU: "LEU", 'L', 10,
    LYS: "LYS", 'K', 11,
    MET: "MET", 'M', 12,
    PHE: "PHE", 'F', 13,
    PRO: "PRO", 'P', 14,
    SER: "SER", 'S', 15,
    THR: "THR", 'T', 16,
    TRP: "TRP", 'W', 17,
    TYR: "TYR", 'Y', 18,
    VAL: "VAL", 'V', 19,
}

impl AminoAcid {
    /// Encode a one-letter sequence, failing on the first symbol outside the alphabet.
    pub fn encode_sequence(sequence: &str) -> Result<Vec<Self>> {
        sequence.chars().map(Self::encode).collect()
    }

    pub fn index(&self) -> usize {
        self.code() as usize
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = FeaturizeError;

    fn try_from(symbol: char) -> Result<Self> {
        Self::encode(symbol)
    }
}
