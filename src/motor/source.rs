use std::rc::Rc;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Thrust magnitude provider
// ---------------------------------------------------------------------------

/// Anything that can report thrust magnitude (N) at a time `t` (s).
pub trait ThrustSource {
    fn thrust(&self, t: f64) -> f64;

    /// End of the burn, if known.
    fn burn_time(&self) -> Option<f64> {
        None
    }
}

/// Wraps a closure `t -> thrust` as a source.
#[derive(Clone, Copy)]
pub struct ThrustFn<F>(pub F);

impl<F> ThrustSource for ThrustFn<F>
where
    F: Fn(f64) -> f64,
{
    fn thrust(&self, t: f64) -> f64 {
        (self.0)(t)
    }
}

impl<T: ThrustSource + ?Sized> ThrustSource for &T {
    fn thrust(&self, t: f64) -> f64 {
        (**self).thrust(t)
    }

    fn burn_time(&self) -> Option<f64> {
        (**self).burn_time()
    }
}

impl<T: ThrustSource + ?Sized> ThrustSource for Box<T> {
    fn thrust(&self, t: f64) -> f64 {
        (**self).thrust(t)
    }

    fn burn_time(&self) -> Option<f64> {
        (**self).burn_time()
    }
}

impl<T: ThrustSource + ?Sized> ThrustSource for Rc<T> {
    fn thrust(&self, t: f64) -> f64 {
        (**self).thrust(t)
    }

    fn burn_time(&self) -> Option<f64> {
        (**self).burn_time()
    }
}

impl<T: ThrustSource + ?Sized> ThrustSource for Arc<T> {
    fn thrust(&self, t: f64) -> f64 {
        (**self).thrust(t)
    }

    fn burn_time(&self) -> Option<f64> {
        (**self).burn_time()
    }
}

// ---------------------------------------------------------------------------
// Constant thrust for a fixed burn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantThrust {
    pub thrust: f64,    // N
    pub burn_time: f64, // s
}

impl ConstantThrust {
    pub fn new(thrust: f64, burn_time: f64) -> Self {
        Self { thrust, burn_time }
    }
}

impl ThrustSource for ConstantThrust {
    fn thrust(&self, t: f64) -> f64 {
        if (0.0..self.burn_time).contains(&t) {
            self.thrust
        } else {
            0.0
        }
    }

    fn burn_time(&self) -> Option<f64> {
        Some(self.burn_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_thrust_during_burn_only() {
        let m = ConstantThrust::new(50.0, 2.0);
        assert_eq!(m.thrust(-0.1), 0.0);
        assert_eq!(m.thrust(0.0), 50.0);
        assert_eq!(m.thrust(1.99), 50.0);
        assert_eq!(m.thrust(2.0), 0.0);
        assert_eq!(m.burn_time(), Some(2.0));
    }

    #[test]
    fn closure_is_a_source() {
        let src = ThrustFn(|t: f64| 10.0 * t);
        assert!((src.thrust(0.5) - 5.0).abs() < 1e-12);
        assert_eq!(src.burn_time(), None);
    }

    #[test]
    fn shared_handles_forward() {
        let m = Rc::new(ConstantThrust::new(12.0, 1.0));
        let by_ref: &dyn ThrustSource = &*m;
        assert_eq!(m.thrust(0.5), 12.0);
        assert_eq!(by_ref.thrust(0.5), 12.0);
        assert_eq!(Arc::new(ConstantThrust::new(3.0, 1.0)).burn_time(), Some(1.0));
        let boxed: Box<dyn ThrustSource> = Box::new(ConstantThrust::new(7.0, 1.0));
        assert_eq!(boxed.thrust(0.2), 7.0);
    }
}
