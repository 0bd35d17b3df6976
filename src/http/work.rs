use std::sync::Arc;

use crate::requests::RequestDescriptor;

/// One scheduled attempt of one descriptor during one repeat pass.
#[derive(Debug, Clone)]
pub struct ExecutionUnit {
    repeat: usize,
    index: usize,
    descriptor: Arc<RequestDescriptor>,
}

impl ExecutionUnit {
    /// 1-based repeat pass this unit belongs to.
    #[must_use]
    pub const fn repeat(&self) -> usize {
        self.repeat
    }

    /// Position of the descriptor in the request list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }
}

/// Expands `descriptors x repeats` into the run's work list.
///
/// Repeats are the outer loop, so each consecutive run of
/// `descriptors.len()` units is one full pass.
#[must_use]
pub fn build_work_list(
    descriptors: &[Arc<RequestDescriptor>],
    repeats: usize,
) -> Vec<ExecutionUnit> {
    let mut units = Vec::with_capacity(descriptors.len().saturating_mul(repeats));
    for repeat in 1..=repeats {
        for (index, descriptor) in descriptors.iter().enumerate() {
            units.push(ExecutionUnit {
                repeat,
                index,
                descriptor: Arc::clone(descriptor),
            });
        }
    }
    units
}
