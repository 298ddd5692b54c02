use tracing::debug;

use crate::{
    error::{EngineError, EngineResult},
    DIM, ROOT_COUNT,
};

/*
The E8 Root Lattice
===================

E8 has 240 roots. Every one of them is a vector in 8-dimensional space, and
together they form the most symmetric packing known in that dimension. Here
they are nothing more than a fixed table of directions: each node picks a few
of them, and the torus angles are projected onto those directions to get
slowly turning phases.

Two Families
------------

  Family A  (112 vectors)
            Pick two axes i < j. Put ±1 on both, zero everywhere else:

                ( 0, ±1, 0, 0, ±1, 0, 0, 0 )

            28 axis pairs × 4 sign combinations = 112.

  Family B  (128 vectors)
            Every axis gets ±1/2, with an EVEN number of minus signs:

                ( ½, -½, ½, ½, -½, ½, ½, ½ )

            2^8 = 256 sign patterns, half of them even = 128.

Scaling
-------

The textbook roots all have length √2. We divide by √2 so every row is a unit
vector, which keeps the projected phases on the same scale as the torus
angles:

    Family A:  ±1 / √2  on two axes
    Family B:  ±½ / √2  on every axis

Order Matters
-------------

Generation order is part of the contract. Nodes address roots by index
(see `modulation/coupling.rs`), so reordering the table would change which
roots every node listens to:

    0..112    Family A, axis pairs in lexicographic order,
              signs (-,-) (-,+) (+,-) (+,+)
    112..240  Family B, ascending bit mask, bit b set = minus on axis b
*/

/// One unit vector of the lattice.
pub type RootVector = [f32; DIM];

/// Number of Family A roots (the first block of the table).
pub const FAMILY_A_COUNT: usize = 112;

/// The 240 E8 roots in generation order. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSystem {
    roots: Vec<RootVector>,
}

impl RootSystem {
    /// Build the lattice.
    ///
    /// Fails only if the two families do not add up to exactly 240 vectors,
    /// which would mean the generator itself is broken.
    ///
    /// ```
    /// use e8_fractal::dsp::roots::RootSystem;
    ///
    /// let roots = RootSystem::generate().unwrap();
    /// assert_eq!(roots.len(), 240);
    /// ```
    pub fn generate() -> EngineResult<Self> {
        let mut roots = Vec::with_capacity(ROOT_COUNT);
        push_family_a(&mut roots);
        push_family_b(&mut roots);

        if roots.len() != ROOT_COUNT {
            return Err(EngineError::RootCount {
                expected: ROOT_COUNT,
                found: roots.len(),
            });
        }

        debug!(count = roots.len(), "generated E8 root lattice");
        Ok(Self { roots })
    }

    #[inline]
    pub fn roots(&self) -> &[RootVector] {
        &self.roots
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&RootVector> {
        self.roots.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RootVector> {
        self.roots.iter()
    }
}

fn push_family_a(roots: &mut Vec<RootVector>) {
    let inv_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
    for i in 0..DIM {
        for j in (i + 1)..DIM {
            for s0 in [-1.0f32, 1.0] {
                for s1 in [-1.0f32, 1.0] {
                    let mut v = [0.0; DIM];
                    v[i] = s0 * inv_sqrt2;
                    v[j] = s1 * inv_sqrt2;
                    roots.push(v);
                }
            }
        }
    }
}

fn push_family_b(roots: &mut Vec<RootVector>) {
    for mask in 0u32..256 {
        if mask.count_ones() % 2 != 0 {
            continue;
        }

        let mut v = [0.0f32; DIM];
        for (bit, value) in v.iter_mut().enumerate() {
            *value = if (mask >> bit) & 1 == 1 { -0.5 } else { 0.5 };
        }

        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in v.iter_mut() {
                *value /= norm;
            }
        }
        roots.push(v);

        if roots.len() == ROOT_COUNT {
            break;
        }
    }
}
