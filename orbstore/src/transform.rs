// Policy applied to every value at insertion time. Implementations must be
// side-effect-free on their input; they may read configuration captured at
// construction (grid shape, cell volume).
pub trait Transform<T> {
    fn apply(&self, value: T) -> T;
}

#[derive(Debug, Default)]
pub struct TransformIdentity;

impl<T> Transform<T> for TransformIdentity {
    fn apply(&self, value: T) -> T {
        value
    }
}
