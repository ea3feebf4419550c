use crate::error::MalformedReason;

type Result<T> = std::result::Result<T, MalformedReason>;

/// Sequential access to the readings of a package, front to back.
pub trait ReadingsReader {
    fn pop_front(&mut self, field: &'static str) -> Result<f64>;

    /// Any finite value.
    fn read_number(&mut self, field: &'static str) -> Result<f64> {
        let value = self.pop_front(field)?;
        if !value.is_finite() {
            return Err(MalformedReason::NotANumber { field, value });
        }
        Ok(value)
    }

    fn read_positive(&mut self, field: &'static str) -> Result<f64> {
        let value = self.read_number(field)?;
        if value <= 0.0 {
            return Err(MalformedReason::NotPositive { field, value });
        }
        Ok(value)
    }

    fn read_count(&mut self, field: &'static str) -> Result<u32> {
        let value = self.read_number(field)?;
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(MalformedReason::NotACount { field, value });
        }
        Ok(value as u32)
    }
}

impl ReadingsReader for &[f64] {
    fn pop_front(&mut self, field: &'static str) -> Result<f64> {
        let (first, rest) = self
            .split_first()
            .ok_or(MalformedReason::Missing(field))?;
        *self = rest;
        Ok(*first)
    }
}
