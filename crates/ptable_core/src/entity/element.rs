//! Element proxy with lazy, memoized attribute access.

use crate::econf::{ElectronicConfiguration, Subshell};
use crate::model::element::{element_attribute, ElementHeader};
use crate::model::records::{
    GroupRecord, IonicRadiusRecord, OxidationCategory, OxidationStateRecord,
    PhaseTransitionRecord, ScatteringFactorRecord, ScreeningConstantRecord, SeriesRecord,
};
use crate::model::value::ScalarValue;
use crate::model::with_uncertainty;
use crate::repo::element_repo::{ElementRepository, SqliteElementRepository};
use crate::repo::isotope_repo::{IsotopeRepository, SqliteIsotopeRepository};
use crate::repo::{RepoError, RepoResult};
use crate::scales::formulas;
use crate::scales::{RadiusKind, Scale, ScaleError, ScaleResult, ZeffMethod};
use log::warn;
use once_cell::unsync::OnceCell;
use rusqlite::Connection;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use super::isotope::Isotope;

/// Group number of the noble gases, the reference column for Sanderson's
/// scale.
const NOBLE_GAS_GROUP: u32 = 18;

/// One value of the Li-Xue electronegativity, keyed by coordination and
/// spin state of the underlying radius entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LiXueElectronegativity {
    pub coordination: String,
    pub spin: Option<String>,
    pub value: f64,
}

/// Lazy proxy for one chemical element.
///
/// Constructing the proxy loads nothing beyond the canonical key and the
/// display identity. Every stored attribute is fetched through the data
/// access layer on first use and memoized on the instance; the store is
/// immutable at runtime, so no invalidation exists.
pub struct Element<'c> {
    conn: &'c Connection,
    header: ElementHeader,
    attrs: RefCell<HashMap<&'static str, Option<ScalarValue>>>,
    econf: OnceCell<ElectronicConfiguration>,
    ionization_energies: OnceCell<BTreeMap<u32, f64>>,
    ionic_radii: OnceCell<Vec<IonicRadiusRecord>>,
    isotope_rows: OnceCell<Vec<crate::model::isotope::IsotopeRecord>>,
    screening_constants: OnceCell<Vec<ScreeningConstantRecord>>,
    oxidation_states: OnceCell<Vec<OxidationStateRecord>>,
    phase_transitions: OnceCell<Vec<PhaseTransitionRecord>>,
    scattering_factors: OnceCell<Vec<ScatteringFactorRecord>>,
}

impl<'c> Element<'c> {
    pub(crate) fn new(conn: &'c Connection, header: ElementHeader) -> Self {
        Self {
            conn,
            header,
            attrs: RefCell::new(HashMap::new()),
            econf: OnceCell::new(),
            ionization_energies: OnceCell::new(),
            ionic_radii: OnceCell::new(),
            isotope_rows: OnceCell::new(),
            screening_constants: OnceCell::new(),
            oxidation_states: OnceCell::new(),
            phase_transitions: OnceCell::new(),
            scattering_factors: OnceCell::new(),
        }
    }

    fn repo(&self) -> SqliteElementRepository<'c> {
        SqliteElementRepository::new(self.conn)
    }

    // -- identity ---------------------------------------------------------

    pub fn atomic_number(&self) -> u32 {
        self.header.atomic_number
    }

    pub fn symbol(&self) -> &str {
        &self.header.symbol
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn header(&self) -> &ElementHeader {
        &self.header
    }

    pub fn protons(&self) -> u32 {
        self.header.atomic_number
    }

    pub fn electrons(&self) -> u32 {
        self.header.atomic_number
    }

    // -- lazy attribute access -------------------------------------------

    /// Fetches one stored attribute by name, at most once per instance.
    ///
    /// `Ok(None)` means the stored value is NULL for this element. Names
    /// outside the closed registry signal `UnknownAttribute`.
    pub fn attribute(&self, name: &str) -> RepoResult<Option<ScalarValue>> {
        let spec = element_attribute(name).ok_or_else(|| RepoError::UnknownAttribute {
            entity: "element",
            name: name.to_string(),
        })?;

        if let Some(cached) = self.attrs.borrow().get(spec.name) {
            return Ok(cached.clone());
        }

        let fetched = self.repo().scalar(self.header.atomic_number, spec.name)?;
        self.attrs
            .borrow_mut()
            .insert(spec.name, fetched.clone());
        Ok(fetched)
    }

    fn real_attr(&self, name: &str) -> RepoResult<Option<f64>> {
        match self.attribute(name)? {
            None => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| {
                RepoError::InvalidData(format!("attribute `{name}` is not numeric"))
            }),
        }
    }

    fn text_attr(&self, name: &str) -> RepoResult<Option<String>> {
        match self.attribute(name)? {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| RepoError::InvalidData(format!("attribute `{name}` is not text"))),
        }
    }

    fn int_attr(&self, name: &str) -> RepoResult<Option<i64>> {
        match self.attribute(name)? {
            None => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or_else(|| {
                RepoError::InvalidData(format!("attribute `{name}` is not an integer"))
            }),
        }
    }

    fn bool_attr(&self, name: &str) -> RepoResult<Option<bool>> {
        match self.attribute(name)? {
            None => Ok(None),
            Some(value) => value.as_bool().map(Some).ok_or_else(|| {
                RepoError::InvalidData(format!("attribute `{name}` is not a boolean"))
            }),
        }
    }

    /// Resolves a required formula input, naming the attribute on failure.
    fn require_real(&self, name: &str) -> ScaleResult<f64> {
        self.real_attr(name)?
            .ok_or_else(|| self.insufficient(name))
    }

    fn insufficient(&self, attribute: &str) -> ScaleError {
        ScaleError::InsufficientData {
            symbol: self.header.symbol.clone(),
            attribute: attribute.to_string(),
        }
    }

    // -- typed getters ----------------------------------------------------

    pub fn atomic_weight(&self) -> RepoResult<Option<f64>> {
        self.real_attr("atomic_weight")
    }

    /// Alias for `atomic_weight`.
    pub fn mass(&self) -> RepoResult<Option<f64>> {
        self.atomic_weight()
    }

    pub fn atomic_weight_uncertainty(&self) -> RepoResult<Option<f64>> {
        self.real_attr("atomic_weight_uncertainty")
    }

    pub fn density(&self) -> RepoResult<Option<f64>> {
        self.real_attr("density")
    }

    pub fn electron_affinity(&self) -> RepoResult<Option<f64>> {
        self.real_attr("electron_affinity")
    }

    pub fn dipole_polarizability(&self) -> RepoResult<Option<f64>> {
        self.real_attr("dipole_polarizability")
    }

    pub fn covalent_radius_pyykko(&self) -> RepoResult<Option<f64>> {
        self.real_attr("covalent_radius_pyykko")
    }

    /// Default covalent radius, i.e. the Pyykko single-bond value.
    pub fn covalent_radius(&self) -> RepoResult<Option<f64>> {
        self.covalent_radius_pyykko()
    }

    pub fn atomic_radius(&self) -> RepoResult<Option<f64>> {
        self.real_attr("atomic_radius")
    }

    pub fn vdw_radius(&self) -> RepoResult<Option<f64>> {
        self.real_attr("vdw_radius")
    }

    pub fn block(&self) -> RepoResult<String> {
        self.text_attr("block")?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "element {} has no block assignment",
                self.header.atomic_number
            ))
        })
    }

    pub fn period(&self) -> RepoResult<u32> {
        let period = self.int_attr("period")?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "element {} has no period assignment",
                self.header.atomic_number
            ))
        })?;
        u32::try_from(period)
            .map_err(|_| RepoError::InvalidData(format!("invalid period value {period}")))
    }

    pub fn group_id(&self) -> RepoResult<Option<u32>> {
        match self.int_attr("group_id")? {
            None => Ok(None),
            Some(id) => u32::try_from(id)
                .map(Some)
                .map_err(|_| RepoError::InvalidData(format!("invalid group id {id}"))),
        }
    }

    pub fn is_radioactive(&self) -> RepoResult<Option<bool>> {
        self.bool_attr("is_radioactive")
    }

    pub fn is_monoisotopic(&self) -> RepoResult<Option<bool>> {
        self.bool_attr("is_monoisotopic")
    }

    // -- relations --------------------------------------------------------

    /// Parsed ground-state electronic configuration.
    pub fn econf(&self) -> ScaleResult<&ElectronicConfiguration> {
        self.econf.get_or_try_init(|| {
            let text = self
                .text_attr("econf")
                .map_err(ScaleError::Repo)?
                .ok_or_else(|| self.insufficient("econf"))?;
            ElectronicConfiguration::parse(&text).map_err(|err| {
                ScaleError::Repo(RepoError::InvalidData(format!(
                    "element {}: {err}",
                    self.header.atomic_number
                )))
            })
        })
    }

    /// Ionization energies in eV, keyed by degree of ionization.
    pub fn ionenergies(&self) -> RepoResult<&BTreeMap<u32, f64>> {
        self.ionization_energies
            .get_or_try_init(|| self.repo().ionization_energies(self.header.atomic_number))
    }

    pub fn ionization_energy(&self, degree: u32) -> RepoResult<Option<f64>> {
        Ok(self.ionenergies()?.get(&degree).copied())
    }

    pub fn ionic_radii(&self) -> RepoResult<&[IonicRadiusRecord]> {
        self.ionic_radii
            .get_or_try_init(|| self.repo().ionic_radii(self.header.atomic_number))
            .map(Vec::as_slice)
    }

    fn isotope_records(&self) -> RepoResult<&[crate::model::isotope::IsotopeRecord]> {
        self.isotope_rows
            .get_or_try_init(|| {
                SqliteIsotopeRepository::new(self.conn).for_element(self.header.atomic_number)
            })
            .map(Vec::as_slice)
    }

    /// All isotopes of this element, ordered by mass number.
    pub fn isotopes(&self) -> RepoResult<Vec<Isotope<'c>>> {
        Ok(self
            .isotope_records()?
            .iter()
            .map(|record| Isotope::preloaded(self.conn, self.header.symbol.clone(), record.clone()))
            .collect())
    }

    /// The isotope with the given mass number.
    pub fn isotope(&self, mass_number: u32) -> RepoResult<Isotope<'c>> {
        self.isotope_records()?
            .iter()
            .find(|record| record.mass_number == mass_number)
            .map(|record| Isotope::preloaded(self.conn, self.header.symbol.clone(), record.clone()))
            .ok_or_else(|| {
                RepoError::NotFound(format!("isotope {}-{mass_number}", self.header.symbol))
            })
    }

    /// Oxidation states, optionally restricted to one category.
    pub fn oxidation_states(
        &self,
        category: Option<OxidationCategory>,
    ) -> RepoResult<Vec<i32>> {
        let records = self
            .oxidation_states
            .get_or_try_init(|| self.repo().oxidation_states(self.header.atomic_number))?;
        let mut states: Vec<i32> = records
            .iter()
            .filter(|record| category.map_or(true, |c| record.category == c))
            .map(|record| record.oxidation_state)
            .collect();
        states.sort_unstable();
        states.dedup();
        Ok(states)
    }

    /// Main oxidation states, the common shorthand.
    pub fn oxistates(&self) -> RepoResult<Vec<i32>> {
        self.oxidation_states(Some(OxidationCategory::Main))
    }

    pub fn screening_constants(&self) -> RepoResult<&[ScreeningConstantRecord]> {
        self.screening_constants
            .get_or_try_init(|| self.repo().screening_constants(self.header.atomic_number))
            .map(Vec::as_slice)
    }

    /// Stored Clementi-Raimondi screening constant for `(n, subshell)`.
    pub fn screening_constant(&self, n: u32, subshell: Subshell) -> RepoResult<Option<f64>> {
        Ok(self
            .screening_constants()?
            .iter()
            .find(|record| record.n == n && record.subshell == subshell.to_string())
            .map(|record| record.screening))
    }

    pub fn phase_transitions(&self) -> RepoResult<&[PhaseTransitionRecord]> {
        self.phase_transitions
            .get_or_try_init(|| self.repo().phase_transitions(self.header.atomic_number))
            .map(Vec::as_slice)
    }

    pub fn scattering_factors(&self) -> RepoResult<&[ScatteringFactorRecord]> {
        self.scattering_factors
            .get_or_try_init(|| self.repo().scattering_factors(self.header.atomic_number))
            .map(Vec::as_slice)
    }

    pub fn group(&self) -> RepoResult<Option<GroupRecord>> {
        self.repo().group_of(self.header.atomic_number)
    }

    pub fn series(&self) -> RepoResult<Option<SeriesRecord>> {
        self.repo().series_of(self.header.atomic_number)
    }

    /// Melting point in K, proxied from the phase transition table.
    ///
    /// Elements with one allotrope report its value; two allotropes whose
    /// values agree within 1% report the first; anything else is `None`.
    pub fn melting_point(&self) -> RepoResult<Option<f64>> {
        self.phase_transition_point(|t| t.melting_point, "melting_point")
    }

    /// Boiling point in K, with the same allotrope handling as
    /// `melting_point`.
    pub fn boiling_point(&self) -> RepoResult<Option<f64>> {
        self.phase_transition_point(|t| t.boiling_point, "boiling_point")
    }

    fn phase_transition_point(
        &self,
        point: impl Fn(&PhaseTransitionRecord) -> Option<f64>,
        label: &str,
    ) -> RepoResult<Option<f64>> {
        let transitions = self.phase_transitions()?;
        match transitions {
            [] => Ok(None),
            [only] => Ok(point(only)),
            [first, second] => match (point(first), point(second)) {
                (Some(a), Some(b)) if (a - b).abs() <= 0.01 * a.abs().max(b.abs()) => {
                    Ok(Some(a))
                }
                _ => {
                    warn!(
                        "event=allotrope_ambiguity module=entity symbol={} property={label}",
                        self.header.symbol
                    );
                    Ok(None)
                }
            },
            _ => Ok(None),
        }
    }

    // -- derived quantities ----------------------------------------------

    /// Mass number of the most abundant natural isotope; falls back to the
    /// lightest listed isotope, then to the rounded atomic weight.
    pub fn mass_number(&self) -> RepoResult<u32> {
        let records = self.isotope_records()?;
        if let Some(best) = records
            .iter()
            .filter(|record| record.abundance.is_some())
            .max_by(|a, b| {
                a.abundance
                    .partial_cmp(&b.abundance)
                    .unwrap_or(Ordering::Equal)
            })
        {
            return Ok(best.mass_number);
        }
        if let Some(first) = records.first() {
            return Ok(first.mass_number);
        }

        let weight = self.atomic_weight()?.ok_or_else(|| {
            RepoError::InvalidData(format!(
                "element {} has neither isotopes nor an atomic weight",
                self.header.atomic_number
            ))
        })?;
        Ok(weight.round() as u32)
    }

    /// Neutron count of the most abundant natural isotope.
    pub fn neutrons(&self) -> RepoResult<u32> {
        Ok(self.mass_number()? - self.header.atomic_number)
    }

    /// Atomic volume in cm3/mol.
    pub fn atomic_volume(&self) -> ScaleResult<f64> {
        let weight = self.require_real("atomic_weight")?;
        let density = self.require_real("density")?;
        Ok(weight / density)
    }

    /// Atomic weight formatted with uncertainty, radioactive elements in
    /// brackets.
    pub fn mass_str(&self) -> RepoResult<String> {
        let weight = self.atomic_weight()?;
        let uncertainty = self.atomic_weight_uncertainty()?;
        let radioactive = self.is_radioactive()?.unwrap_or(false);

        let Some(weight) = weight else {
            return Ok("None".to_string());
        };
        let body = match uncertainty {
            None if radioactive => format!("{weight:.0}"),
            None => format!("{weight:.3}"),
            Some(_) => with_uncertainty(Some(weight), uncertainty, 3),
        };
        Ok(if radioactive {
            format!("[{body}]")
        } else {
            body
        })
    }

    /// International Chemical Identifier of the neutral atom.
    pub fn inchi(&self) -> String {
        format!("InChI=1S/{}", self.header.symbol)
    }

    /// Empirical formulas of the oxides implied by the positive main
    /// oxidation states.
    pub fn oxides(&self) -> RepoResult<Vec<String>> {
        let states = self.oxistates()?;
        Ok(states
            .into_iter()
            .filter(|state| *state > 0)
            .map(|state| {
                let state = state as u32;
                let divisor = gcd(2, state);
                let metal = 2 / divisor;
                let oxygen = state / divisor;
                format!(
                    "{}{}O{}",
                    self.header.symbol,
                    coefficient(metal),
                    coefficient(oxygen)
                )
            })
            .collect())
    }

    /// Number of valence electrons.
    pub fn nvalence(&self) -> ScaleResult<u32> {
        let block = self.block().map_err(ScaleError::Repo)?;
        Ok(self.econf()?.nvalence(&block))
    }

    /// Effective nuclear charge for `(n, subshell)`.
    ///
    /// Defaults: `n` is the valence shell, `subshell` the occupied valence
    /// subshell with the highest angular momentum. The Slater path derives
    /// screening from the electronic configuration; the Clementi path uses
    /// stored SCF constants and yields `None` where none is tabulated.
    pub fn zeff(
        &self,
        n: Option<u32>,
        subshell: Option<Subshell>,
        method: ZeffMethod,
        alle: bool,
    ) -> ScaleResult<Option<f64>> {
        let ec = self.econf()?;
        let n = n.unwrap_or_else(|| ec.max_n());
        let subshell = subshell.unwrap_or_else(|| ec.valence_subshell());
        let z = f64::from(self.header.atomic_number);

        match method {
            ZeffMethod::Slater => Ok(Some(z - ec.slater_screening(n, subshell, alle))),
            ZeffMethod::Clementi => {
                let screening = self
                    .screening_constant(n, subshell)
                    .map_err(ScaleError::Repo)?;
                Ok(screening.map(|s| z - s))
            }
        }
    }

    fn zeff_slater_default(&self) -> ScaleResult<f64> {
        // Slater zeff always exists once the configuration is known.
        Ok(self
            .zeff(None, None, ZeffMethod::Slater, false)?
            .unwrap_or_else(|| f64::from(self.header.atomic_number)))
    }

    /// Frontier orbital energies `(IE-like, EA-like)` in eV for a given
    /// cation charge: the neutral atom pairs the first ionization energy
    /// with the electron affinity, a cation of charge k pairs the k+1-th
    /// with the k-th ionization energy.
    fn frontier_energies(&self, charge: i32) -> ScaleResult<(f64, f64)> {
        if charge < 0 {
            return Err(ScaleError::InvalidCharge { charge });
        }
        if charge == 0 {
            let ie = self
                .ionization_energy(1)
                .map_err(ScaleError::Repo)?
                .ok_or_else(|| self.insufficient("ionization_energies[1]"))?;
            let ea = self.require_real("electron_affinity")?;
            return Ok((ie, ea));
        }

        let charge = charge as u32;
        let upper = self
            .ionization_energy(charge + 1)
            .map_err(ScaleError::Repo)?
            .ok_or_else(|| {
                self.insufficient(&format!("ionization_energies[{}]", charge + 1))
            })?;
        let lower = self
            .ionization_energy(charge)
            .map_err(ScaleError::Repo)?
            .ok_or_else(|| self.insufficient(&format!("ionization_energies[{charge}]")))?;
        Ok((upper, lower))
    }

    /// Absolute hardness in eV for the given cation charge.
    pub fn hardness(&self, charge: i32) -> ScaleResult<f64> {
        let (ie, ea) = self.frontier_energies(charge)?;
        Ok(formulas::hardness(ie, ea))
    }

    /// Absolute softness in 1/eV.
    pub fn softness(&self, charge: i32) -> ScaleResult<f64> {
        Ok(1.0 / (2.0 * self.hardness(charge)?))
    }

    /// Parr's electrophilicity index.
    pub fn electrophilicity(&self) -> ScaleResult<f64> {
        let (ie, ea) = self.frontier_energies(0)?;
        Ok(formulas::electrophilicity(ie, ea))
    }

    // -- electronegativity ------------------------------------------------

    /// Computes the electronegativity on the requested scale.
    pub fn electronegativity(&self, scale: Scale) -> ScaleResult<f64> {
        if let Some(attribute) = scale.stored_attribute() {
            return self.require_real(attribute);
        }

        match scale {
            Scale::AllredRochow => {
                let radius = self.require_real("covalent_radius_pyykko")?;
                Ok(formulas::allred_rochow(self.zeff_slater_default()?, radius))
            }
            Scale::CottrellSutton => {
                let radius = self.require_real("covalent_radius_pyykko")?;
                Ok(formulas::cottrell_sutton(
                    self.zeff_slater_default()?,
                    radius,
                ))
            }
            Scale::Gordy => {
                let radius = self.require_real("covalent_radius_pyykko")?;
                Ok(formulas::gordy(self.zeff_slater_default()?, radius))
            }
            Scale::MartynovBatsanov => self.electronegativity_martynov_batsanov(),
            Scale::Mulliken => self.electronegativity_mulliken(0),
            Scale::Nagle => {
                let polarizability = self.require_real("dipole_polarizability")?;
                Ok(formulas::nagle(self.nvalence()?, polarizability))
            }
            Scale::Sanderson => self.electronegativity_sanderson(),
            // Stored scales are handled above.
            _ => unreachable!("stored scale dispatched through stored_attribute"),
        }
    }

    /// Parses the scale name, then computes the electronegativity.
    pub fn electronegativity_named(&self, scale: &str) -> ScaleResult<f64> {
        self.electronegativity(Scale::parse(scale)?)
    }

    /// Mulliken electronegativity of the atom or one of its cations.
    pub fn electronegativity_mulliken(&self, charge: i32) -> ScaleResult<f64> {
        let (ie, ea) = self.frontier_energies(charge)?;
        Ok(formulas::mulliken(ie, ea))
    }

    /// Martynov-Batsanov electronegativity: mean over the valence
    /// ionization energies.
    fn electronegativity_martynov_batsanov(&self) -> ScaleResult<f64> {
        let n_valence = self.nvalence()?;
        let mut energies = Vec::with_capacity(n_valence as usize);
        for degree in 1..=n_valence {
            let energy = self
                .ionization_energy(degree)
                .map_err(ScaleError::Repo)?
                .ok_or_else(|| {
                    self.insufficient(&format!("ionization_energies[{degree}]"))
                })?;
            energies.push(energy);
        }
        Ok(formulas::martynov_batsanov(&energies))
    }

    /// Sanderson electronegativity relative to the interpolated noble-gas
    /// covalent radius at this atomic number.
    fn electronegativity_sanderson(&self) -> ScaleResult<f64> {
        let radius = self.require_real("covalent_radius_pyykko")?;

        let points: Vec<(f64, f64)> = self
            .repo()
            .group_attribute(NOBLE_GAS_GROUP, "covalent_radius_pyykko")
            .map_err(ScaleError::Repo)?
            .into_iter()
            .filter_map(|(z, r)| r.map(|r| (f64::from(z), r)))
            .collect();

        let noble_radius = formulas::interpolate_linear(
            f64::from(self.header.atomic_number),
            &points,
        )
        .ok_or_else(|| self.insufficient("covalent_radius_pyykko (group 18)"))?;

        Ok(formulas::sanderson(radius, noble_radius))
    }

    /// Li-Xue electronegativities for one cation charge, keyed by the
    /// coordination (and spin) of each tabulated radius.
    pub fn electronegativity_li_xue(
        &self,
        charge: i32,
        radius_kind: RadiusKind,
    ) -> ScaleResult<Vec<LiXueElectronegativity>> {
        if charge <= 0 {
            return Err(ScaleError::InvalidCharge { charge });
        }

        let ie = self
            .ionization_energy(charge as u32)
            .map_err(ScaleError::Repo)?
            .ok_or_else(|| self.insufficient(&format!("ionization_energies[{charge}]")))?;
        let max_n = self.econf()?.max_n();

        let entries = self
            .ionic_radii()
            .map_err(ScaleError::Repo)?
            .iter()
            .filter(|record| record.charge == charge)
            .filter_map(|record| {
                let radius = match radius_kind {
                    RadiusKind::Crystal => record.crystal_radius,
                    RadiusKind::Ionic => record.ionic_radius,
                }?;
                Some(LiXueElectronegativity {
                    coordination: record.coordination.clone(),
                    spin: record.spin.clone(),
                    value: formulas::li_xue(ie, radius, max_n),
                })
            })
            .collect();
        Ok(entries)
    }
}

fn coefficient(value: u32) -> String {
    if value == 1 {
        String::new()
    } else {
        value.to_string()
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("atomic_number", &self.header.atomic_number)
            .field("symbol", &self.header.symbol)
            .field("name", &self.header.name)
            .finish_non_exhaustive()
    }
}

impl Display for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.header.atomic_number, self.header.symbol, self.header.name
        )
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.header.atomic_number == other.header.atomic_number
    }
}

impl Eq for Element<'_> {}

impl PartialOrd for Element<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.header.atomic_number.cmp(&other.header.atomic_number)
    }
}

impl Hash for Element<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.atomic_number.hash(state);
    }
}
