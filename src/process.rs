//! Process abstraction
//! ChainedProcess is monomorphised: the compiler knows the concrete type of
//! every stage, so the normalizer's fixed chain inlines into a single pass
//! with no dynamic dispatch.
use crate::stage::Stage;
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current = self.previous.process(text);
        if !self.stage.needs_apply(&current) {
            return current;
        }
        self.stage.apply(current)
    }
}

/// Builds a chain from the front: `Chain::new().then(A).then(B)` runs A, then B.
pub struct Chain<P: Process> {
    current: P,
}

impl Chain<EmptyProcess> {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            current: EmptyProcess,
        }
    }
}

impl<P: Process> Chain<P> {
    #[inline(always)]
    pub fn then<S: Stage>(self, stage: S) -> Chain<ChainedProcess<S, P>> {
        Chain {
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    #[inline(always)]
    pub fn build(self) -> P {
        self.current
    }
}
