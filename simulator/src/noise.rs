use imu_common::Real;
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

pub(crate) enum Noise {
    None,
    Gaussian(Normal<Real>),
}

impl Noise {
    pub(crate) fn new(std_dev: Real) -> Result<Self, NormalError> {
        if std_dev.is_nan() || std_dev < 0.0 {
            Err(NormalError::BadVariance)
        } else if std_dev == 0.0 {
            Ok(Self::None)
        } else {
            Ok(Self::Gaussian(Normal::new(0.0, std_dev)?))
        }
    }

    pub(crate) fn noisify<R: Rng + ?Sized>(&self, value: Real, rng: &mut R) -> Real {
        match self {
            Self::None => value,
            Self::Gaussian(normal) => value + normal.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn zero_noise_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let noise = Noise::new(0.0).unwrap();
        assert_eq!(noise.noisify(1.25, &mut rng), 1.25);
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        assert!(matches!(Noise::new(-1.0), Err(NormalError::BadVariance)));
        assert!(matches!(Noise::new(Real::NAN), Err(NormalError::BadVariance)));
    }

    #[test]
    fn gaussian_noise_is_centred() {
        let mut rng = StdRng::seed_from_u64(1);
        let noise = Noise::new(0.5).unwrap();
        let n = 20_000;
        let mean = (0..n).map(|_| noise.noisify(3.0, &mut rng)).sum::<Real>() / n as Real;
        assert!((mean - 3.0).abs() < 0.02, "{mean}");
    }
}
