//! Implementation of the instruction store

use crate::ast::Instruction;
use crate::disasm::{Error, Result, Writer};
use index_list::{IndexList, ListIndex};
use std::collections::{HashMap, HashSet};
use std::io;

/// Convert the list's "no such node" index into an `Option`.
fn live(index: ListIndex) -> Option<ListIndex> {
    if index.is_some() {
        Some(index)
    } else {
        None
    }
}

/// A decoded instruction stream.
///
/// Instructions live in an arena-backed linked list in the order they were
/// added, which must also be ascending address order. An address index gives
/// constant-time lookup, and every branch seen during construction records
/// its target so that writers know where to put labels.
///
/// A disassembly is built by repeated calls to `add_instruction` during a
/// single decoding pass and is read-only afterwards.
#[derive(Debug)]
pub struct Disassembly {
    /// All instructions, linked in insertion order.
    list: IndexList<Instruction>,

    /// Node of each stored instruction, keyed by address.
    addresses: HashMap<u32, ListIndex>,

    /// Nodes of every branch instruction, in the order they were added.
    branches: Vec<ListIndex>,

    /// Every address some branch can transfer control to.
    ///
    /// Targets need not be stored instructions.
    branch_targets: HashSet<u32>,
}

impl Default for Disassembly {
    fn default() -> Self {
        Self::new()
    }
}

impl Disassembly {
    pub fn new() -> Self {
        Disassembly {
            list: IndexList::new(),
            addresses: HashMap::new(),
            branches: Vec::new(),
            branch_targets: HashSet::new(),
        }
    }

    /// Append an instruction after the current last instruction.
    ///
    /// The instruction's address must be higher than every address already
    /// stored. Duplicate or out-of-order addresses are rejected and leave the
    /// disassembly untouched.
    ///
    /// Yields the stored instruction so that callers can attach further
    /// metadata to it.
    pub fn add_instruction(&mut self, instr: Instruction) -> Result<&mut Instruction> {
        let address = instr.address();

        if self.addresses.contains_key(&address) {
            return Err(Error::DuplicateAddress(address));
        }

        if let Some(last) = self.last() {
            if address < last.address() {
                return Err(Error::AddressOutOfOrder {
                    address,
                    last: last.address(),
                });
            }
        }

        let target = instr.target();
        let index = self.list.insert_last(instr);

        self.addresses.insert(address, index);

        if let Some(target) = target {
            self.branches.push(index);
            self.branch_targets.insert(target);
        }

        Ok(self
            .list
            .get_mut(index)
            .expect("I just inserted it, it should be there."))
    }

    pub fn has_instruction(&self, address: u32) -> bool {
        self.addresses.contains_key(&address)
    }

    /// Get the instruction at a given address, if one was added.
    pub fn get_instruction(&self, address: u32) -> Option<&Instruction> {
        self.addresses
            .get(&address)
            .and_then(|index| self.list.get(*index))
    }

    /// Copy out every instruction, in address order.
    ///
    /// The copy is independent of the disassembly.
    pub fn get_instructions(&self) -> Vec<Instruction> {
        self.iter().cloned().collect()
    }

    /// Collect the run of instructions starting at `from` and ending at the
    /// last instruction whose address is no higher than `to`.
    ///
    /// `from` must be the address of a stored instruction; `to` may be any
    /// address at all. If `to` lies before `from` the slice is empty.
    pub fn slice_instructions(&self, from: u32, to: u32) -> Result<Vec<&Instruction>> {
        let start = self
            .addresses
            .get(&from)
            .ok_or(Error::RangeStartNotFound(from))?;

        Ok(Iter {
            list: &self.list,
            cursor: live(*start),
        }
        .take_while(|instr| instr.address() <= to)
        .collect())
    }

    /// Iterate every instruction, in address order.
    ///
    /// Each call starts over from the first instruction.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: &self.list,
            cursor: live(self.list.first_index()),
        }
    }

    /// The instruction following the one at `address`.
    pub fn next_of(&self, address: u32) -> Option<&Instruction> {
        let index = self.addresses.get(&address)?;

        live(self.list.next_index(*index)).and_then(|next| self.list.get(next))
    }

    /// The instruction preceding the one at `address`.
    pub fn prev_of(&self, address: u32) -> Option<&Instruction> {
        let index = self.addresses.get(&address)?;

        live(self.list.prev_index(*index)).and_then(|prev| self.list.get(prev))
    }

    pub fn first(&self) -> Option<&Instruction> {
        live(self.list.first_index()).and_then(|index| self.list.get(index))
    }

    pub fn last(&self) -> Option<&Instruction> {
        live(self.list.last_index()).and_then(|index| self.list.get(index))
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.len() == 0
    }

    /// Iterate every branch instruction, in the order they were added.
    pub fn branches(&self) -> impl Iterator<Item = &Instruction> {
        self.branches
            .iter()
            .filter_map(move |index| self.list.get(*index))
    }

    pub fn is_branch_target(&self, address: u32) -> bool {
        self.branch_targets.contains(&address)
    }

    /// List every branch target address, lowest first.
    pub fn branch_targets(&self) -> Vec<u32> {
        let mut targets: Vec<u32> = self.branch_targets.iter().copied().collect();
        targets.sort_unstable();

        targets
    }

    /// Render the disassembly with a writer.
    ///
    /// Every instruction is handed to the writer in address order. Each
    /// instruction that is a branch target has its label written first.
    pub fn visit<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Writer + ?Sized,
    {
        self.visit_each(self.iter(), writer)
    }

    /// Render the instructions that `slice_instructions(from, to)` would
    /// yield, labeling branch targets the same way `visit` does.
    pub fn visit_range<W>(&self, from: u32, to: u32, writer: &mut W) -> io::Result<()>
    where
        W: Writer + ?Sized,
    {
        let slice = self.slice_instructions(from, to)?;

        self.visit_each(slice, writer)
    }

    fn visit_each<'a, I, W>(&self, instrs: I, writer: &mut W) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Instruction>,
        W: Writer + ?Sized,
    {
        for instr in instrs {
            if self.is_branch_target(instr.address()) {
                writer.write_branch_label(instr.address())?;
            }

            writer.write_instruction(instr)?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Disassembly {
    type Item = &'a Instruction;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over a disassembly's instructions.
pub struct Iter<'a> {
    list: &'a IndexList<Instruction>,
    cursor: Option<ListIndex>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Instruction;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let instr = self.list.get(index)?;

        self.cursor = live(self.list.next_index(index));

        Some(instr)
    }
}
