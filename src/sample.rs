//! Native rendition of the demo class declared in `test-project/test.h`,
//! the header the fixtures and docs are built around. The C++ declaration
//! leans on arity-based overloading, a virtual method, and raw
//! pointer/reference returns; here each of those becomes an explicit shape:
//! distinctly named operations per arity, a single-method trait for the
//! overridable hook, owned `Box` returns where the caller takes ownership,
//! and a borrow of instance-owned storage where the C++ version hands out a
//! bare reference.

use std::io::{self, Write};

/// Two private integer fields plus the storage backing [`Sample::add_four`]'s
/// borrowed return, so that reference's lifetime is simply the borrow of the
/// instance.
#[derive(Debug, Default)]
pub struct Sample {
    a: i32,
    b: i32,
    last_sum: f64,
}

/// The overridable hook of the demo class. Concrete types supply their own
/// zero-parameter variant; [`Sample`] provides the base behavior.
pub trait Overridable {
    fn method_virtual(&self) -> u32;
}

impl Sample {
    /// Default construction. Field values start at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs with explicit field values. No validation.
    pub fn with_fields(a: i32, b: i32) -> Self {
        Self {
            a,
            b,
            last_sum: 0.0,
        }
    }

    /// Constructs like [`Sample::with_fields`], ignoring `c` for state
    /// purposes, and emits the fixed diagnostic line `inline constructor`
    /// exactly once. Hand it a locked stdout for console output.
    pub fn traced(a: i32, b: i32, _c: i32, out: &mut impl Write) -> io::Result<Self> {
        writeln!(out, "inline constructor")?;
        Ok(Self::with_fields(a, b))
    }

    /// Emits the two fields in human-readable form.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "a = {}, b = {}", self.a, self.b)
    }

    pub fn get_a(&self) -> i32 {
        self.a
    }

    pub fn get_b(&self) -> i32 {
        self.b
    }

    /// Sum of the two arguments by value. Wraps on overflow.
    pub fn add_two(&self, a: i32, b: i32) -> u32 {
        a.wrapping_add(b) as u32
    }

    /// Sum of the three arguments, newly allocated; ownership transfers to
    /// the caller, who releases it by dropping the box.
    pub fn add_three(&self, a: i32, b: i32, c: i32) -> Box<u32> {
        Box::new(a.wrapping_add(b).wrapping_add(c) as u32)
    }

    /// Sum of the four arguments as a double, stored on the instance; the
    /// returned reference borrows that storage and cannot outlive it.
    pub fn add_four(&mut self, a: i32, b: i32, c: i32, d: i32) -> &f64 {
        self.last_sum = f64::from(a) + f64::from(b) + f64::from(c) + f64::from(d);
        &self.last_sum
    }

    /// Capability-only no-op; guaranteed not to mutate the instance.
    pub fn method_const(&self) {}

    /// Sum of the stored fields, newly allocated; ownership transfers to
    /// the caller.
    pub fn method_return_pointer(&self) -> Box<u32> {
        Box::new(self.a.wrapping_add(self.b) as u32)
    }

    /// One-argument arithmetic variant.
    pub fn method_overload_one(&self, a: i32) -> f64 {
        f64::from(a) / 2.0
    }

    /// Two-argument arithmetic variant.
    pub fn method_overload_two(&self, a: i32, b: i32) -> f64 {
        f64::from(a) * f64::from(b)
    }

    /// The non-overridable one-parameter sibling of the hook.
    pub fn method_virtual_with(&self, b: i32) -> u32 {
        self.a.wrapping_add(b) as u32
    }

    /// Emits the fixed diagnostic line `inline method` exactly once; no
    /// other effect.
    pub fn method_inline(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "inline method")
    }
}

impl Overridable for Sample {
    fn method_virtual(&self) -> u32 {
        self.a.wrapping_add(self.b) as u32
    }
}
