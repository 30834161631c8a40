use super::Operation;
use crate::lang::Letter;

/// ## Letter-addressed memory
///
/// Three regions, all zero-initialized `f64` cells:
///
/// - 32 scalar cells, one per letter;
/// - a 1024-cell vector region, 32 vectors of 32 cells, addressed
///   `wrap(32·letter + i, 1024)`;
/// - a 4096-cell matrix region, addressed
///   `wrap(1024·letter + 32·i, 4096) + wrap(j, 32)` — the letter's high
///   bits wrap modulo 4, so only four distinct matrices exist no matter
///   which letter names them.
///
/// Indices always wrap; addressing never fails. Fractional index operands
/// are floored to the containing cell before wrapping.

pub struct Memory {
    scalars: [f64; 32],
    vectors: Vec<f64>,
    matrices: Vec<f64>,
}

fn wrap(raw: f64, size: usize) -> usize {
    let wrapped = Operation::modulus(raw.floor(), size as f64);
    // NaN floors to NaN and casts to 0; anything else is in 0..size
    wrapped as usize % size
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            scalars: [0.0; 32],
            vectors: vec![0.0; 1024],
            matrices: vec![0.0; 4096],
        }
    }

    pub fn scalar(&self, letter: Letter) -> f64 {
        self.scalars[letter.index()]
    }

    pub fn set_scalar(&mut self, letter: Letter, value: f64) {
        self.scalars[letter.index()] = value;
    }

    pub fn vector(&self, letter: Letter, i: f64) -> f64 {
        self.vectors[Memory::vector_index(letter, i)]
    }

    pub fn set_vector(&mut self, letter: Letter, i: f64, value: f64) {
        self.vectors[Memory::vector_index(letter, i)] = value;
    }

    pub fn matrix(&self, letter: Letter, i: f64, j: f64) -> f64 {
        self.matrices[Memory::matrix_index(letter, i, j)]
    }

    pub fn set_matrix(&mut self, letter: Letter, i: f64, j: f64, value: f64) {
        self.matrices[Memory::matrix_index(letter, i, j)] = value;
    }

    fn vector_index(letter: Letter, i: f64) -> usize {
        wrap(32.0 * letter.index() as f64 + i.floor(), 1024)
    }

    fn matrix_index(letter: Letter, i: f64, j: f64) -> usize {
        wrap(1024.0 * letter.index() as f64 + 32.0 * i.floor(), 4096) + wrap(j, 32)
    }
}
