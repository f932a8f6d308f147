//mean and variance of measured quantities, errors via bootstrap

use {
    rand_pcg::Pcg64,
    net_ensembles::sampling::bootstrap::bootstrap_copyable
};

pub const BOOTSTRAP_SAMPLES: usize = 400;

#[derive(Clone, Debug)]
pub struct MyVarianceBootstrap
{
    pub mean: f64,
    pub mean_err: f64,
    pub var: f64,
    pub var_err: f64
}

impl MyVarianceBootstrap{
    /// `frac` divides every value, e.g. by the system size
    pub fn from_slice(
        slice: &[u32],
        frac: Option<f64>,
        bootstrap_rng: &mut Pcg64
    ) -> Option<Self>
    {
        if slice.is_empty(){
            return None;
        }
        let (mean, mean_err) = bootstrap_copyable(
            &mut *bootstrap_rng,
            BOOTSTRAP_SAMPLES,
            slice,
            |slice| calc_average(slice, frac)
        );
        let (var, var_err) = bootstrap_copyable(
            &mut *bootstrap_rng,
            BOOTSTRAP_SAMPLES,
            slice,
            |slice| calc_variance(slice, mean, frac)
        );
        Some(
            Self{
                mean,
                var,
                mean_err,
                var_err
            }
        )
    }
}

/// slice must not be empty
pub fn calc_average(slice: &[u32], frac: Option<f64>) -> f64
{
    let sum: u64 = slice.iter()
        .map(|&val| val as u64)
        .sum();

    let len = slice.len() as u64;
    let rest = sum % len;
    let div = sum / len;

    let res = div as f64 + (rest as f64) / (len as f64);
    match frac{
        None => res,
        Some(f) => res / f
    }
}

pub fn calc_variance(slice: &[u32], average: f64, frac: Option<f64>) -> f64
{
    let scale = frac.unwrap_or(1.0);
    let var_sum: f64 = slice.iter()
        .map(
            |&val|
            {
                let dif = average - val as f64 / scale;
                dif * dif
            }
        ).sum();

    var_sum / slice.len() as f64
}

#[cfg(test)]
mod tests{
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn mean_and_variance()
    {
        let data = [1, 2, 3, 4];
        let mean = calc_average(&data, None);
        assert_eq!(mean, 2.5);
        assert_eq!(calc_variance(&data, mean, None), 1.25);
        let scaled = calc_average(&data, Some(2.0));
        assert_eq!(scaled, 1.25);
        assert!((calc_variance(&data, scaled, Some(2.0)) - 0.3125).abs() < 1e-12);
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(MyVarianceBootstrap::from_slice(&[], None, &mut rng).is_none());
    }

    #[test]
    fn bootstrap_of_constant_data_has_no_error()
    {
        let mut rng = Pcg64::seed_from_u64(5);
        let b = MyVarianceBootstrap::from_slice(&[7; 50], None, &mut rng).unwrap();
        assert!((b.mean - 7.0).abs() < 1e-12);
        assert!(b.mean_err.abs() < 1e-12);
        assert!(b.var.abs() < 1e-12);
    }
}
