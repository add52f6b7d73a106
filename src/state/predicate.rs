use std::fmt;
use std::rc::Rc;

/// Per-axis decision `(primary_delta, cross_delta) -> bool`.
/// Booleans normalize to constant predicates at construction time.
#[derive(Clone)]
pub struct AxisPredicate(Rc<dyn Fn(f64, f64) -> bool>);

impl AxisPredicate {
    pub fn new(f: impl Fn(f64, f64) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    pub fn never() -> Self {
        Self::new(|_, _| false)
    }

    /// Accepts only when the movement along this axis is at least as large as the cross axis.
    pub fn dominant() -> Self {
        Self::new(|primary, cross| primary.abs() >= cross.abs())
    }

    pub fn evaluate(&self, primary: f64, cross: f64) -> bool {
        (self.0)(primary, cross)
    }
}

impl From<bool> for AxisPredicate {
    fn from(value: bool) -> Self {
        if value { Self::always() } else { Self::never() }
    }
}

impl Default for AxisPredicate {
    fn default() -> Self {
        Self::never()
    }
}

impl fmt::Debug for AxisPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AxisPredicate(..)")
    }
}

/// Decides whether an accepted move halts propagation to ancestor handlers.
#[derive(Clone)]
pub struct PropagationPredicate(Rc<dyn Fn() -> bool>);

impl PropagationPredicate {
    pub fn new(f: impl Fn() -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn evaluate(&self) -> bool {
        (self.0)()
    }
}

impl From<bool> for PropagationPredicate {
    fn from(value: bool) -> Self {
        Self::new(move || value)
    }
}

impl From<Option<bool>> for PropagationPredicate {
    fn from(value: Option<bool>) -> Self {
        value.unwrap_or(false).into()
    }
}

impl Default for PropagationPredicate {
    fn default() -> Self {
        false.into()
    }
}

impl fmt::Debug for PropagationPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PropagationPredicate(..)")
    }
}
