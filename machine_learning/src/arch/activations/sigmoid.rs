#[derive(Clone, Debug, PartialEq)]
pub struct Sigmoid {
    amp: f32,
}

impl Sigmoid {
    pub fn new(amp: f32) -> Self {
        Self { amp }
    }

    pub fn amp(&self) -> f32 {
        self.amp
    }

    pub fn f(&self, z: f32) -> f32 {
        self.amp / (1. + (-z).exp())
    }
}

impl Default for Sigmoid {
    fn default() -> Self {
        Self::new(1.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_at_half_amplitude() {
        assert_eq!(Sigmoid::default().f(0.), 0.5);
        assert_eq!(Sigmoid::new(4.).f(0.), 2.);
    }

    #[test]
    fn saturates() {
        let s = Sigmoid::default();
        assert!(s.f(20.) > 0.999);
        assert!(s.f(-20.) < 0.001);
    }
}
