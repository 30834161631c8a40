use super::{Action, Address};
use std::collections::HashMap;

/// Either the main routine or a numbered subroutine; each is a contiguous
/// region of the flat action sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Routine {
    Main,
    Sub(u32),
}

/// ## Compiled program
///
/// One flat action sequence plus two label tables. Jump labels and
/// subroutine labels are independent namespaces: `*0` inside a routine is
/// a jump target, `*0` between routines opens subroutine 0, and the two
/// never collide. A `Program` is immutable once the parser returns it, so
/// any number of engines may execute it concurrently.
#[derive(Debug, PartialEq, Default)]
pub struct Program {
    actions: Vec<Action>,
    jmp_indices: HashMap<u32, Address>,
    sub_indices: HashMap<u32, Address>,
}

impl Program {
    pub(crate) fn new(
        actions: Vec<Action>,
        jmp_indices: HashMap<u32, Address>,
        sub_indices: HashMap<u32, Address>,
    ) -> Program {
        debug_assert!(jmp_indices.values().all(|a| *a < actions.len()));
        debug_assert!(sub_indices.values().all(|a| *a < actions.len()));
        Program {
            actions,
            jmp_indices,
            sub_indices,
        }
    }

    pub fn action(&self, addr: Address) -> Action {
        self.actions[addr]
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn jmp_index(&self, label: u32) -> Option<Address> {
        self.jmp_indices.get(&label).copied()
    }

    pub fn sub_index(&self, label: u32) -> Option<Address> {
        self.sub_indices.get(&label).copied()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, action) in self.actions.iter().enumerate() {
            let jmp = self
                .jmp_indices
                .iter()
                .find(|(_, a)| **a == addr)
                .map(|(l, _)| format!(" *{}", l))
                .unwrap_or_default();
            let sub = self
                .sub_indices
                .iter()
                .find(|(_, a)| **a == addr)
                .map(|(l, _)| format!(" SUB {}", l))
                .unwrap_or_default();
            writeln!(f, "{:>4}{}{} {}", addr, sub, jmp, action)?;
        }
        Ok(())
    }
}
