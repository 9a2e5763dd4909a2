use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Add;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::de::DeserializeOwned;
        use serde::Serialize;

        pub trait RootData: Clone + Serialize + DeserializeOwned + Sized {}
        impl<T: Clone + Serialize + DeserializeOwned + Sized> RootData for T {}
    } else {
        pub trait RootData: Clone + Sized {}
        impl<T: Clone + Sized> RootData for T {}
    }
}

pub trait RootKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> RootKey for T {}

pub trait RoutingSystem {
    /// Address of the node in the topology, MUST be unique within a graph
    type NodeAddress: Ord + PartialOrd + RootData + RootKey + Debug + Display;
    /// Link and route cost. Lower is better.
    type Metric: Metric;
    fn config() -> ProtocolParams {
        Default::default()
    }
}

/// A numeric cost that can be summed along a path and compared.
///
/// Routes only ever get replaced by a strictly smaller metric, so `PartialOrd` is enough,
/// which lets floating point weights be used directly.
pub trait Metric: Copy + PartialOrd + Add<Output = Self> + RootData + Debug + Display {
    const ZERO: Self;

    /// Sum of two costs along a path, clamped to the type's range instead of overflowing
    fn sum(self, other: Self) -> Self;

    fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }
}

macro_rules! impl_int_metric {
    ($($t:ty),*) => {
        $(impl Metric for $t {
            const ZERO: Self = 0;

            fn sum(self, other: Self) -> Self {
                self.saturating_add(other)
            }
        })*
    };
}

impl_int_metric!(u16, u32, u64, i32, i64);

impl Metric for f64 {
    const ZERO: Self = 0.0;

    fn sum(self, other: Self) -> Self {
        self + other
    }
}

/// Wraps a metric so that `+` saturates, for algorithms that only know `Add`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PathCost<M: Metric>(pub M);

impl<M: Metric> Add for PathCost<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        PathCost(self.0.sum(rhs.0))
    }
}

impl<M: Metric> Default for PathCost<M> {
    fn default() -> Self {
        PathCost(M::ZERO)
    }
}

/// Simulation parameters
#[derive(Clone, Debug)]
pub struct ProtocolParams {
    /// reject graphs where weight(a, b) != weight(b, a)
    pub validate_symmetry: bool,
    /// the loop gives up after `max_round_factor * node count` rounds. Values below 1 are treated as 1
    pub max_round_factor: usize,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            validate_symmetry: false,
            max_round_factor: 4,
        }
    }
}
