pub mod input;
pub mod interpreter;

/// Number of cells on the tape.
pub const TAPE_LEN: usize = 30_000;

/// The mutable execution state: a fixed tape of byte cells plus the data
/// pointer. Owned by exactly one interpreter per run.
pub struct Machine {
    cells: Vec<u8>,
    pointer: usize,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cells: vec![0; TAPE_LEN],
            pointer: 0,
        }
    }

    /// Zero every cell and park the pointer on cell 0.
    pub fn reset(&mut self) {
        self.cells = vec![0; self.cells.len()];
        self.pointer = 0;
    }

    /// Moves the pointer left. Any underflow relocates it to the last
    /// cell, regardless of how far past zero the move went.
    pub fn move_left(&mut self, by: usize) {
        self.pointer = match self.pointer.checked_sub(by) {
            Some(pointer) => pointer,
            None => self.cells.len() - 1,
        };
    }

    /// Moves the pointer right. Any overflow relocates it to cell 0.
    pub fn move_right(&mut self, by: usize) {
        self.pointer += by;
        if self.pointer >= self.cells.len() {
            self.pointer = 0;
        }
    }

    /// The value in the current cell.
    pub fn read(&self) -> u8 {
        self.cells[self.pointer]
    }

    /// Adds to the current cell, saturating at 255. Cells never wrap.
    pub fn increment(&mut self, by: u8) {
        self.cells[self.pointer] = self.cells[self.pointer].saturating_add(by);
    }

    /// Subtracts from the current cell, saturating at 0.
    pub fn decrement(&mut self, by: u8) {
        self.cells[self.pointer] = self.cells[self.pointer].saturating_sub(by);
    }

    /// Stores an input byte in the current cell.
    pub fn write(&mut self, value: u8) {
        self.cells[self.pointer] = value;
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The full tape rendered as dump text, one integer per cell.
    pub fn dump(&self) -> String {
        let values = self
            .cells
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("register = [\n{values}\n]\n")
    }

    /// A window of `radius` cells around the pointer, for step mode.
    pub fn snapshot(&self, radius: usize) -> String {
        let lower = self.pointer.saturating_sub(radius);
        let upper = (self.pointer + radius).min(self.cells.len());
        let header: String = (lower..upper).map(|i| format!("#{i} ")).collect();
        let separator = "-".repeat(header.len() + 1);
        let values: String = self.cells[lower..upper].iter().map(|cell| format!("{cell}  ")).collect();
        format!(
            "{separator}\n{header}\n{separator}\n{values}\n{separator}\npointer: {}",
            self.pointer
        )
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
