//! Kernel functions for density estimation.
//!
//! ## Purpose
//!
//! This module provides the smoothing kernels summed at every observation to
//! build a kernel density estimate, together with their moment properties.
//!
//! ## Design notes
//!
//! * **Canonical scale**: A bandwidth `h` always denotes the standard deviation
//!   of the scaled kernel. Bounded kernels are stretched by `1 / sigma_K` so
//!   that every kernel smooths comparably for the same `h`.
//! * **Unit mass**: [`Kernel::density`] divides by the kernel integral, so the
//!   scaled kernel integrates to one.
//! * **Support**: Bounded kernels live on [-1, 1]; the Gaussian is cut off at
//!   six standard deviations.
//!
//! ## Invariants
//!
//! * K(u) >= 0 and K(u) = K(-u) for every kernel.
//! * Outside [-1, 1] a bounded kernel is exactly zero.

// External dependencies
use core::f64::consts::{PI, SQRT_2};
use num_traits::Float;

/// sqrt(pi).
const ROOT_PI: f64 = 1.772_453_850_905_516_f64;

/// Normalized distance past which the Gaussian counts as zero (density
/// below 7e-9 of the peak), so kernel sums stay windowed.
const GAUSSIAN_REACH: f64 = 6.0;

/// Raw moments of an unnormalized kernel profile.
///
/// | Kernel       | Profile        | c_K = ∫K    | ∫u²K          | ∫K²          |
/// |--------------|----------------|-------------|---------------|--------------|
/// | Gaussian     | exp(-u²/2)     | √(2π)       | √2·√π         | √π           |
/// | Epanechnikov | 1 - u²         | 4/3         | 4/15          | 16/15        |
/// | Biweight     | (1 - u²)²      | 16/15       | 16/105        | 256/315      |
/// | Triangle     | 1 - \|u\|      | 1           | 1/6           | 2/3          |
/// | Cosine       | cos(πu/2)      | 4/π         | 4/π - 32/π³   | 1            |
/// | Tricube      | (1 - \|u\|³)³  | 81/70       | 1/6           | 6561/6916    |
/// | Uniform      | 1              | 2           | 2/3           | 2            |
#[derive(Debug, Clone, Copy)]
struct Moments {
    mass: f64,
    second: f64,
    square: f64,
}

impl Moments {
    /// Second moment of the unit-mass kernel.
    fn mu2(&self) -> f64 {
        self.second / self.mass
    }

    /// Roughness R(K) of the unit-mass kernel.
    fn r(&self) -> f64 {
        self.square / (self.mass * self.mass)
    }
}

/// Smoothing kernel for density estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kernel {
    /// exp(-u²/2), unbounded. The usual violin plot kernel.
    #[default]
    Gaussian,

    /// 1 - u² on [-1, 1]; AMISE-optimal.
    Epanechnikov,

    /// (1 - u²)² on [-1, 1], also called quartic.
    Biweight,

    /// 1 - |u| on [-1, 1].
    Triangle,

    /// cos(πu/2) on [-1, 1].
    Cosine,

    /// (1 - |u|³)³ on [-1, 1].
    Tricube,

    /// Constant on [-1, 1] (boxcar).
    Uniform,
}

impl Kernel {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Kernel::Gaussian => "Gaussian",
            Kernel::Epanechnikov => "Epanechnikov",
            Kernel::Biweight => "Biweight",
            Kernel::Triangle => "Triangle",
            Kernel::Cosine => "Cosine",
            Kernel::Tricube => "Tricube",
            Kernel::Uniform => "Uniform",
        }
    }

    fn moments(&self) -> Moments {
        let (mass, second, square) = match self {
            Kernel::Gaussian => (SQRT_2 * ROOT_PI, SQRT_2 * ROOT_PI, ROOT_PI),
            Kernel::Epanechnikov => (4.0 / 3.0, 4.0 / 15.0, 16.0 / 15.0),
            Kernel::Biweight => (16.0 / 15.0, 16.0 / 105.0, 256.0 / 315.0),
            Kernel::Triangle => (1.0, 1.0 / 6.0, 2.0 / 3.0),
            Kernel::Cosine => (4.0 / PI, 4.0 / PI - 32.0 / (PI * PI * PI), 1.0),
            Kernel::Tricube => (81.0 / 70.0, 1.0 / 6.0, 6561.0 / 6916.0),
            Kernel::Uniform => (2.0, 2.0 / 3.0, 2.0),
        };
        Moments {
            mass,
            second,
            square,
        }
    }

    /// ∫u²K(u) du of the raw profile.
    pub fn variance(&self) -> f64 {
        self.moments().second
    }

    /// ∫K(u)² du of the raw profile.
    pub fn roughness(&self) -> f64 {
        self.moments().square
    }

    /// ∫K(u) du of the raw profile (the normalizing constant c_K).
    pub fn integrator(&self) -> f64 {
        self.moments().mass
    }

    /// Standard deviation of the unit-mass kernel in native units.
    pub fn std_dev(&self) -> f64 {
        self.moments().mu2().sqrt()
    }

    /// AMISE efficiency relative to Epanechnikov (which scores 1).
    ///
    /// The ratio of `sqrt(mu_2) * R` between Epanechnikov and this kernel.
    pub fn efficiency(&self) -> f64 {
        let cost = |m: Moments| m.mu2().sqrt() * m.r();
        cost(Kernel::Epanechnikov.moments()) / cost(self.moments())
    }

    /// Support in native units; `None` for the Gaussian.
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            Kernel::Gaussian => None,
            _ => Some((-1.0, 1.0)),
        }
    }

    /// `true` unless the kernel is Gaussian.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Kernel::Gaussian)
    }

    /// Native distance beyond which the kernel is zero.
    #[inline]
    pub fn reach(&self) -> f64 {
        if self.is_bounded() {
            1.0
        } else {
            GAUSSIAN_REACH
        }
    }

    /// Native scale per unit of standard-deviation bandwidth (`1 / sigma_K`).
    #[inline]
    pub fn canonical_factor(&self) -> f64 {
        1.0 / self.std_dev()
    }

    /// Raw profile value K(u).
    #[inline]
    pub fn evaluate<T: Float>(&self, u: T) -> T {
        let a = u.abs();
        let one = T::one();
        let outside = if self.is_bounded() {
            a >= one
        } else {
            a > T::from(GAUSSIAN_REACH).unwrap()
        };
        if outside {
            return T::zero();
        }

        match self {
            Kernel::Gaussian => (-(a * a) / T::from(2.0).unwrap()).exp(),
            Kernel::Epanechnikov => one - a * a,
            Kernel::Biweight => (one - a * a).powi(2),
            Kernel::Triangle => one - a,
            Kernel::Cosine => (a * T::from(PI / 2.0).unwrap()).cos(),
            Kernel::Tricube => (one - a * a * a).powi(3),
            Kernel::Uniform => one,
        }
    }

    /// Unit-mass density K(u) / c_K.
    #[inline]
    pub fn density<T: Float>(&self, u: T) -> T {
        self.evaluate(u) / T::from(self.integrator()).unwrap()
    }
}
