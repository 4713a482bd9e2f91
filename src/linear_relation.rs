//! Linear relations over Ristretto255 (spec components C and D).
//!
//! A [`LinearRelation`] is a sparse matrix `M` of group-element bases paired
//! with a target `image`: the statement "I know a scalar vector `w` such
//! that `M(w) == image`". Each row of `M` is a [`LinearCombination`]: an
//! ordered list of `(scalar variable, element variable)` terms. Term order
//! defines the evaluation order.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;

use crate::errors::Error;

/// An opaque handle to a scalar variable allocated in a [`LinearRelation`].
///
/// Indices are stable once issued and are never reclaimed: a relation is
/// built up monotonically and then consumed by the engine.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct ScalarVar(usize);

impl ScalarVar {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An opaque handle to a group-element variable allocated in a
/// [`LinearRelation`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct GroupVar(usize);

impl GroupVar {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single `scalar * element` term in a [`LinearCombination`].
#[derive(Copy, Clone, Debug)]
pub struct Term {
    scalar: ScalarVar,
    elem: GroupVar,
}

impl Term {
    pub fn scalar(&self) -> ScalarVar {
        self.scalar
    }
    pub fn elem(&self) -> GroupVar {
        self.elem
    }
}

impl From<(ScalarVar, GroupVar)> for Term {
    fn from((scalar, elem): (ScalarVar, GroupVar)) -> Self {
        Self { scalar, elem }
    }
}

/// A sparse row of a [`LinearMap`]: `term_0 + term_1 + ... + term_{t-1}`.
///
/// Duplicate terms are permitted and sum, since evaluation is a plain
/// left-fold over the stored terms (spec section 4.4).
#[derive(Clone, Debug, Default)]
pub struct LinearCombination(Vec<Term>);

impl LinearCombination {
    pub fn terms(&self) -> &[Term] {
        &self.0
    }
}

impl From<Term> for LinearCombination {
    fn from(term: Term) -> Self {
        Self(vec![term])
    }
}

impl From<(ScalarVar, GroupVar)> for LinearCombination {
    fn from(term: (ScalarVar, GroupVar)) -> Self {
        Self(vec![term.into()])
    }
}

impl From<Vec<Term>> for LinearCombination {
    fn from(terms: Vec<Term>) -> Self {
        Self(terms)
    }
}

impl From<Vec<(ScalarVar, GroupVar)>> for LinearCombination {
    fn from(terms: Vec<(ScalarVar, GroupVar)>) -> Self {
        Self(terms.into_iter().map(Into::into).collect())
    }
}

/// Ordered mapping from [`GroupVar`] to assigned group elements.
///
/// A slot left unassigned when it is read yields
/// [`Error::UnassignedGroupVar`]; this happens only if a caller allocates an
/// element variable and forgets to call `set_element` before the relation is
/// used.
#[derive(Clone, Debug, Default)]
pub struct GroupMap(Vec<Option<RistrettoPoint>>);

impl GroupMap {
    /// Assign (or overwrite) the element bound to `var`.
    pub fn assign(&mut self, var: GroupVar, element: RistrettoPoint) {
        if self.0.len() <= var.0 {
            self.0.resize(var.0 + 1, None);
        }
        self.0[var.0] = Some(element);
    }

    /// Read the element bound to `var`.
    pub fn get(&self, var: GroupVar) -> Result<RistrettoPoint, Error> {
        self.0
            .get(var.0)
            .copied()
            .flatten()
            .ok_or(Error::UnassignedGroupVar { var })
    }
}

/// Evaluate a multi-scalar multiplication: `sum_i scalars[i] * bases[i]`.
///
/// A plain left-fold, matching spec section 4.4: it does not special-case or
/// early-return on an intermediate identity result, since the identity point
/// is a legal intermediate (and final) value.
fn msm(scalars: &[Scalar], bases: &[RistrettoPoint]) -> RistrettoPoint {
    let mut acc = RistrettoPoint::identity();
    for (s, p) in scalars.iter().zip(bases.iter()) {
        acc += p * s;
    }
    acc
}

/// The public matrix `M`: a list of sparse rows over a shared pool of
/// group-element bases (spec section 3, "LinearMap").
#[derive(Clone, Debug, Default)]
pub struct LinearMap {
    rows: Vec<LinearCombination>,
    elements: GroupMap,
    num_scalars: usize,
    num_elements: usize,
}

impl LinearMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_scalars(&self) -> usize {
        self.num_scalars
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    pub fn num_constraints(&self) -> usize {
        self.rows.len()
    }

    /// Evaluate every row against `scalars`, returning one group element per
    /// row (spec section 4.4).
    ///
    /// Rejects an empty row with [`Error::InvalidRelation`] (there is no
    /// ambiguous "identity" convention for a zero-term equation), an
    /// out-of-range scalar index with [`Error::InvalidWitnessLength`], and
    /// an unassigned element variable with [`Error::UnassignedGroupVar`].
    pub fn evaluate(&self, scalars: &[Scalar]) -> Result<Vec<RistrettoPoint>, Error> {
        if scalars.len() != self.num_scalars {
            return Err(Error::InvalidWitnessLength);
        }
        self.rows
            .iter()
            .map(|row| {
                if row.terms().is_empty() {
                    return Err(Error::InvalidRelation);
                }
                let coefficients: Vec<Scalar> = row
                    .terms()
                    .iter()
                    .map(|term| scalars[term.scalar().index()])
                    .collect();
                let bases: Vec<RistrettoPoint> = row
                    .terms()
                    .iter()
                    .map(|term| self.elements.get(term.elem()))
                    .collect::<Result<_, _>>()?;
                Ok(msm(&coefficients, &bases))
            })
            .collect()
    }
}

/// A [`LinearMap`] together with the target image it is claimed to hit:
/// "I know `w` such that `M(w) == image`" (spec section 3, "Relation").
#[derive(Clone, Debug, Default)]
pub struct LinearRelation {
    map: LinearMap,
    image: Vec<GroupVar>,
}

impl LinearRelation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&self) -> &LinearMap {
        &self.map
    }

    /// Allocate a single scalar variable.
    pub fn allocate_scalar(&mut self) -> ScalarVar {
        let var = ScalarVar(self.map.num_scalars);
        self.map.num_scalars += 1;
        var
    }

    /// Allocate `n` scalar variables, returning the first one's index; the
    /// rest are implicitly the following `n - 1` indices (spec section 4.3).
    pub fn allocate_scalars(&mut self, n: usize) -> Vec<ScalarVar> {
        (0..n).map(|_| self.allocate_scalar()).collect()
    }

    /// Allocate a single group-element variable. The slot is unassigned
    /// until [`LinearRelation::set_element`] is called.
    pub fn allocate_element(&mut self) -> GroupVar {
        let var = GroupVar(self.map.num_elements);
        self.map.num_elements += 1;
        var
    }

    /// Allocate `n` group-element variables.
    pub fn allocate_elements(&mut self, n: usize) -> Vec<GroupVar> {
        (0..n).map(|_| self.allocate_element()).collect()
    }

    /// Assign the concrete point value of an allocated element variable.
    pub fn set_element(&mut self, var: GroupVar, element: RistrettoPoint) {
        self.map.elements.assign(var, element);
    }

    /// Assign several element variables at once.
    pub fn set_elements(&mut self, assignments: impl IntoIterator<Item = (GroupVar, RistrettoPoint)>) {
        for (var, element) in assignments {
            self.set_element(var, element);
        }
    }

    /// Append an equation `image[lhs] = sum of rhs terms` to the relation.
    pub fn append_equation(&mut self, lhs: GroupVar, rhs: impl Into<LinearCombination>) {
        self.map.rows.push(rhs.into());
        self.image.push(lhs);
    }

    /// Convenience wrapper over [`LinearRelation::append_equation`] for the
    /// common single-term row `image[lhs] = scalar * elem` (spec section
    /// 4.3, `add_equation_simple`). Carries no semantics beyond the general
    /// form.
    pub fn add_equation_simple(&mut self, lhs: GroupVar, scalar: ScalarVar, elem: GroupVar) {
        self.append_equation(lhs, Term::from((scalar, elem)));
    }

    /// The target image points, in row order.
    ///
    /// Fails with [`Error::UnassignedGroupVar`] if any image variable was
    /// never assigned a concrete point.
    pub fn image(&self) -> Result<Vec<RistrettoPoint>, Error> {
        self.image.iter().map(|&var| self.map.elements.get(var)).collect()
    }

    /// Compute the image of `scalars` under the map and store it as this
    /// relation's image, assigning every image variable in the process.
    ///
    /// A convenience for building a relation directly from a witness
    /// (useful in tests and examples); protocol wrappers normally set the
    /// image directly from caller-supplied public points instead.
    pub fn compute_image(&mut self, scalars: &[Scalar]) -> Result<(), Error> {
        let computed = self.map.evaluate(scalars)?;
        for (&var, point) in self.image.iter().zip(computed) {
            self.map.elements.assign(var, point);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn schnorr_shaped_relation_evaluates() {
        let mut rel = LinearRelation::new();
        let [x] = [rel.allocate_scalar()];
        let [g, y] = [rel.allocate_element(), rel.allocate_element()];

        let generator = crate::group::point_base_mul(&Scalar::ONE);
        let witness = Scalar::random(&mut OsRng);
        let public = generator * witness;

        rel.set_element(g, generator);
        rel.set_element(y, public);
        rel.add_equation_simple(y, x, g);

        let evaluated = rel.map().evaluate(&[witness]).unwrap();
        assert_eq!(evaluated, vec![public]);
        assert_eq!(rel.image().unwrap(), vec![public]);
    }

    #[test]
    fn empty_row_is_rejected() {
        let mut rel = LinearRelation::new();
        rel.allocate_scalar();
        let g = rel.allocate_element();
        rel.append_equation(g, LinearCombination::default());
        assert_eq!(rel.map().evaluate(&[Scalar::ZERO]), Err(Error::InvalidRelation));
    }

    #[test]
    fn unassigned_element_is_rejected() {
        let mut rel = LinearRelation::new();
        let x = rel.allocate_scalar();
        let g = rel.allocate_element();
        let y = rel.allocate_element();
        rel.set_element(g, crate::group::point_base_mul(&Scalar::ONE));
        rel.add_equation_simple(y, x, g);
        assert_eq!(
            rel.map().evaluate(&[Scalar::ONE]),
            Err(Error::UnassignedGroupVar { var: y })
        );
    }
}
