//! Ground-state electronic configurations.
//!
//! # Responsibility
//! - Parse stored configuration strings (`"1s2 2s2 2p4"` or the
//!   noble-core form `"[Ne] 3s1"`).
//! - Provide shell arithmetic for the derived-property engine: valence
//!   counts and Slater screening.
//!
//! # Invariants
//! - Occupations are keyed by `(n, subshell)` and strictly positive.
//! - Parsing never panics; malformed text is a typed error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})([spdfg])(\d{1,2})$").unwrap());
static CORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([A-Z][a-z]?)\]$").unwrap());

/// Noble-gas cores accepted in the shorthand configuration form.
const NOBLE_CORES: &[(&str, &str)] = &[
    ("He", "1s2"),
    ("Ne", "1s2 2s2 2p6"),
    ("Ar", "1s2 2s2 2p6 3s2 3p6"),
    ("Kr", "1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6"),
    ("Xe", "1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 5s2 5p6"),
    (
        "Rn",
        "1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 5s2 5p6 4f14 5d10 6s2 6p6",
    ),
];

pub type EconfResult<T> = Result<T, EconfError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EconfError {
    InvalidToken { token: String },
    UnknownCore { core: String },
    Empty,
}

impl Display for EconfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token } => {
                write!(f, "invalid electronic configuration token `{token}`")
            }
            Self::UnknownCore { core } => write!(f, "unknown noble-gas core `[{core}]`"),
            Self::Empty => write!(f, "empty electronic configuration"),
        }
    }
}

impl Error for EconfError {}

/// Subshell labels in order of increasing angular momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subshell {
    S,
    P,
    D,
    F,
    G,
}

impl Subshell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::S),
            'p' => Some(Self::P),
            'd' => Some(Self::D),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
            Self::G => 'g',
        }
    }

    /// Azimuthal quantum number.
    pub fn l(self) -> u32 {
        match self {
            Self::S => 0,
            Self::P => 1,
            Self::D => 2,
            Self::F => 3,
            Self::G => 4,
        }
    }
}

impl Display for Subshell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parsed ground-state electronic configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronicConfiguration {
    occupations: BTreeMap<(u32, Subshell), u32>,
}

impl ElectronicConfiguration {
    /// Parses a configuration string, expanding a leading noble-gas core.
    pub fn parse(text: &str) -> EconfResult<Self> {
        let mut occupations = BTreeMap::new();
        let mut seen_any = false;

        for (index, token) in text.split_whitespace().enumerate() {
            if index == 0 {
                if let Some(caps) = CORE_RE.captures(token) {
                    let core = &caps[1];
                    let expansion = NOBLE_CORES
                        .iter()
                        .find(|(symbol, _)| *symbol == core)
                        .map(|(_, conf)| *conf)
                        .ok_or_else(|| EconfError::UnknownCore {
                            core: core.to_string(),
                        })?;
                    for core_token in expansion.split_whitespace() {
                        add_token(&mut occupations, core_token)?;
                    }
                    seen_any = true;
                    continue;
                }
            }
            add_token(&mut occupations, token)?;
            seen_any = true;
        }

        if !seen_any {
            return Err(EconfError::Empty);
        }
        Ok(Self { occupations })
    }

    /// Largest occupied principal quantum number.
    pub fn max_n(&self) -> u32 {
        self.occupations.keys().map(|(n, _)| *n).max().unwrap_or(0)
    }

    pub fn occupation(&self, n: u32, subshell: Subshell) -> u32 {
        self.occupations.get(&(n, subshell)).copied().unwrap_or(0)
    }

    /// Total electron count.
    pub fn electrons(&self) -> u32 {
        self.occupations.values().sum()
    }

    /// Highest-angular-momentum subshell occupied in the valence shell.
    pub fn valence_subshell(&self) -> Subshell {
        let n = self.max_n();
        self.occupations
            .keys()
            .filter(|(pn, _)| *pn == n)
            .map(|(_, sub)| *sub)
            .max_by_key(|sub| sub.l())
            .unwrap_or(Subshell::S)
    }

    /// Number of valence electrons for a given periodic-table block.
    ///
    /// s/p block: all electrons in the outermost shell. d block: outer s
    /// plus (n-1)d. f block: outer s plus (n-2)f plus any (n-1)d.
    pub fn nvalence(&self, block: &str) -> u32 {
        let n = self.max_n();
        match block {
            "d" => self.occupation(n, Subshell::S) + self.occupation(n - 1, Subshell::D),
            "f" => {
                self.occupation(n, Subshell::S)
                    + self.occupation(n.saturating_sub(2), Subshell::F)
                    + self.occupation(n - 1, Subshell::D)
            }
            _ => self
                .occupations
                .iter()
                .filter(|((pn, _), _)| *pn == n)
                .map(|(_, occ)| *occ)
                .sum(),
        }
    }

    /// Slater screening constant for an electron in `(n, subshell)`.
    ///
    /// Follows Slater (1930): shielding groups are `[1s] [ns,np] [nd]
    /// [nf]`. Within the group each other electron contributes 0.35
    /// (0.30 inside 1s); for an s/p electron, shell n-1 contributes 0.85
    /// per electron and deeper shells 1.00; for a d/f electron every
    /// inner electron contributes 1.00.
    ///
    /// With `alle` the screening felt by one extra electron added to the
    /// group is computed, so the target does not shield itself away.
    pub fn slater_screening(&self, n: u32, subshell: Subshell, alle: bool) -> f64 {
        let same_group = |pn: u32, sub: Subshell| -> bool {
            match subshell {
                Subshell::S | Subshell::P => {
                    pn == n && matches!(sub, Subshell::S | Subshell::P)
                }
                _ => pn == n && sub == subshell,
            }
        };

        let mut screening = 0.0;
        for (&(pn, sub), &occ) in &self.occupations {
            let occ = occ as f64;
            if same_group(pn, sub) {
                let own_group_factor = if n == 1 { 0.30 } else { 0.35 };
                screening += occ * own_group_factor;
                continue;
            }

            match subshell {
                Subshell::S | Subshell::P => {
                    if pn + 1 == n {
                        screening += occ * 0.85;
                    } else if pn < n {
                        screening += occ;
                    }
                }
                // d/f: all electrons in inner groups screen fully,
                // including same-n s and p.
                _ => {
                    let inner_same_n =
                        pn == n && sub.l() < subshell.l();
                    if pn < n || inner_same_n {
                        screening += occ;
                    }
                }
            }
        }

        if !alle {
            // Remove the target electron's own contribution.
            let own_group_factor = if n == 1 { 0.30 } else { 0.35 };
            screening -= own_group_factor;
        }
        screening.max(0.0)
    }
}

fn add_token(
    occupations: &mut BTreeMap<(u32, Subshell), u32>,
    token: &str,
) -> EconfResult<()> {
    let caps = TOKEN_RE.captures(token).ok_or_else(|| EconfError::InvalidToken {
        token: token.to_string(),
    })?;

    let n: u32 = caps[1].parse().map_err(|_| EconfError::InvalidToken {
        token: token.to_string(),
    })?;
    let subshell = caps[2]
        .chars()
        .next()
        .and_then(Subshell::from_char)
        .ok_or_else(|| EconfError::InvalidToken {
            token: token.to_string(),
        })?;
    let occ: u32 = caps[3].parse().map_err(|_| EconfError::InvalidToken {
        token: token.to_string(),
    })?;

    if n == 0 || occ == 0 || subshell.l() >= n || occ > 2 * (2 * subshell.l() + 1) {
        return Err(EconfError::InvalidToken {
            token: token.to_string(),
        });
    }

    *occupations.entry((n, subshell)).or_insert(0) += occ;
    Ok(())
}
