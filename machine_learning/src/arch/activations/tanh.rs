/// Hyperbolic tangent, bounded to `(-1, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tanh;

impl Tanh {
    pub fn f(&self, z: f32) -> f32 {
        z.tanh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_and_bounded() {
        assert_eq!(Tanh.f(0.), 0.);
        assert_eq!(Tanh.f(-1.5), -Tanh.f(1.5));
        assert!(Tanh.f(50.) <= 1.);
    }
}
