// Copyright 2024-2025 Irreducible Inc.

//! Evaluates one lane-wise operation on two vectors given as comma separated lane lists.
//!
//! ```text
//! lanewise-demo --width 128 --lane i16 --op mul --lhs 1,2,3 --rhs 4,5,6
//! <4, 10, 18, 0, 0, 0, 0, 0>
//! ```

use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use lanewise_utils::tracing::init_tracing;
use lanewise_vector::{
	arithmetic_traits::{LaneArithmetic, LaneCompare, LaneShift},
	lane::LaneBits,
	IntegerLane, Lane, NumericLane, Register, Vector, M128, M256, M64,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Eq,
	Ne,
	Gt,
	Lt,
	Ge,
	Le,
	Shl,
	Shr,
	And,
	Or,
	Xor,
}

impl Op {
	const ALL: [Self; 16] = [
		Self::Add,
		Self::Sub,
		Self::Mul,
		Self::Div,
		Self::Rem,
		Self::Eq,
		Self::Ne,
		Self::Gt,
		Self::Lt,
		Self::Ge,
		Self::Le,
		Self::Shl,
		Self::Shr,
		Self::And,
		Self::Or,
		Self::Xor,
	];

	fn name(self) -> &'static str {
		match self {
			Self::Add => "add",
			Self::Sub => "sub",
			Self::Mul => "mul",
			Self::Div => "div",
			Self::Rem => "rem",
			Self::Eq => "eq",
			Self::Ne => "ne",
			Self::Gt => "gt",
			Self::Lt => "lt",
			Self::Ge => "ge",
			Self::Le => "le",
			Self::Shl => "shl",
			Self::Shr => "shr",
			Self::And => "and",
			Self::Or => "or",
			Self::Xor => "xor",
		}
	}
}

impl FromStr for Op {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|op| op.name() == s)
			.ok_or_else(|| anyhow!("Unknown lane operation: {s}"))
	}
}

impl Display for Op {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LaneType {
	I8,
	U8,
	I16,
	U16,
	I32,
	U32,
	I64,
	U64,
	F32,
	F64,
	Bool,
}

#[derive(Debug, Parser)]
#[command(name = "lanewise-demo")]
struct Args {
	/// The register width in bits: 64, 128 or 256.
	#[arg(long, default_value_t = 128)]
	width: u32,
	/// The lane type.
	#[arg(long, value_enum, default_value_t = LaneType::I32)]
	lane: LaneType,
	/// The operation to perform.
	#[arg(long, default_value_t = Op::Add)]
	op: Op,
	/// Comma separated lanes of the left operand, missing lanes are zero.
	#[arg(long)]
	lhs: String,
	/// Comma separated lanes of the right operand, missing lanes are zero.
	#[arg(long)]
	rhs: String,
}

fn parse_vector<R, T>(lanes: &str) -> Result<Vector<R, T>>
where
	R: Register,
	T: Lane + FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let values: Vec<T> = lanes
		.split(',')
		.map(str::trim)
		.filter(|lane| !lane.is_empty())
		.map(str::parse::<T>)
		.try_collect()?;

	Ok(Vector::from_lanes(&values)?)
}

fn arithmetic<R, T>(op: Op, lhs: Vector<R, T>, rhs: Vector<R, T>) -> Option<Result<Vector<R, T>>>
where
	R: LaneArithmetic<T>,
	T: NumericLane,
{
	let result = match op {
		Op::Add => Ok(lhs + rhs),
		Op::Sub => Ok(lhs - rhs),
		Op::Mul => Ok(lhs * rhs),
		Op::Div => lhs.checked_div(rhs).map_err(Into::into),
		Op::Rem => lhs.checked_rem(rhs).map_err(Into::into),
		_ => return None,
	};

	Some(result)
}

fn shift<R, T>(op: Op, lhs: Vector<R, T>, rhs: Vector<R, T>) -> Option<Vector<R, T>>
where
	R: LaneShift<T>,
	T: IntegerLane,
{
	match op {
		Op::Shl => Some(lhs << rhs),
		Op::Shr => Some(lhs >> rhs),
		_ => None,
	}
}

fn bitwise<R, T>(op: Op, lhs: Vector<R, T>, rhs: Vector<R, T>) -> Option<Vector<R, T>>
where
	R: Register,
	T: Lane,
{
	match op {
		Op::And => Some(lhs & rhs),
		Op::Or => Some(lhs | rhs),
		Op::Xor => Some(lhs ^ rhs),
		_ => None,
	}
}

/// Renders the comparison mask as booleans.
fn compare<R, T>(op: Op, lhs: Vector<R, T>, rhs: Vector<R, T>) -> Option<String>
where
	R: LaneCompare<T>,
	T: Lane,
{
	let mask = match op {
		Op::Eq => lhs.simd_eq(rhs),
		Op::Ne => lhs.simd_ne(rhs),
		Op::Gt => lhs.simd_gt(rhs),
		Op::Lt => lhs.simd_lt(rhs),
		Op::Ge => lhs.simd_ge(rhs),
		Op::Le => lhs.simd_le(rhs),
		_ => return None,
	};

	Some(format!("<{}>", mask.iter().map(|lane| lane.to_bits() != T::Bits::ZERO).format(", ")))
}

fn eval_integer<R, T>(args: &Args) -> Result<String>
where
	R: LaneArithmetic<T> + LaneCompare<T> + LaneShift<T>,
	T: IntegerLane + FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let lhs = parse_vector::<R, T>(&args.lhs)?;
	let rhs = parse_vector::<R, T>(&args.rhs)?;

	if let Some(result) = arithmetic(args.op, lhs, rhs) {
		return Ok(result?.to_string());
	}
	shift(args.op, lhs, rhs)
		.or_else(|| bitwise(args.op, lhs, rhs))
		.map(|result| result.to_string())
		.or_else(|| compare(args.op, lhs, rhs))
		.ok_or_else(|| anyhow!("`{}` is not supported for {:?} lanes", args.op, args.lane))
}

fn eval_float<R, T>(args: &Args) -> Result<String>
where
	R: LaneArithmetic<T> + LaneCompare<T>,
	T: NumericLane + FromStr,
	T::Err: std::error::Error + Send + Sync + 'static,
{
	let lhs = parse_vector::<R, T>(&args.lhs)?;
	let rhs = parse_vector::<R, T>(&args.rhs)?;

	if let Some(result) = arithmetic(args.op, lhs, rhs) {
		return Ok(result?.to_string());
	}
	bitwise(args.op, lhs, rhs)
		.map(|result| result.to_string())
		.or_else(|| compare(args.op, lhs, rhs))
		.ok_or_else(|| anyhow!("`{}` requires integer lanes", args.op))
}

fn eval_bool<R: LaneCompare<bool>>(args: &Args) -> Result<String> {
	let lhs = parse_vector::<R, bool>(&args.lhs)?;
	let rhs = parse_vector::<R, bool>(&args.rhs)?;

	bitwise(args.op, lhs, rhs)
		.map(|result| result.to_string())
		.or_else(|| compare(args.op, lhs, rhs))
		.ok_or_else(|| anyhow!("`{}` is not supported for bool lanes", args.op))
}

macro_rules! eval_with_register {
	($register:ty, $args:expr) => {
		match $args.lane {
			LaneType::I8 => eval_integer::<$register, i8>($args),
			LaneType::U8 => eval_integer::<$register, u8>($args),
			LaneType::I16 => eval_integer::<$register, i16>($args),
			LaneType::U16 => eval_integer::<$register, u16>($args),
			LaneType::I32 => eval_integer::<$register, i32>($args),
			LaneType::U32 => eval_integer::<$register, u32>($args),
			LaneType::I64 => eval_integer::<$register, i64>($args),
			LaneType::U64 => eval_integer::<$register, u64>($args),
			LaneType::F32 => eval_float::<$register, f32>($args),
			LaneType::F64 => eval_float::<$register, f64>($args),
			LaneType::Bool => eval_bool::<$register>($args),
		}
	};
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();
	tracing::debug!(?args, "parsed arguments");

	let result = match args.width {
		64 => eval_with_register!(M64, &args),
		128 => eval_with_register!(M128, &args),
		256 => eval_with_register!(M256, &args),
		width => bail!("Unsupported vector width: {width}"),
	}?;

	tracing::info!(width = args.width, lane = ?args.lane, op = %args.op, "evaluated");
	println!("{result}");

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn make_args(width: u32, lane: LaneType, op: Op, lhs: &str, rhs: &str) -> Args {
		Args {
			width,
			lane,
			op,
			lhs: lhs.to_string(),
			rhs: rhs.to_string(),
		}
	}

	#[test]
	fn test_parse_op() {
		assert_eq!("MUL".parse::<Op>().unwrap(), Op::Mul);
		assert_eq!("shr".parse::<Op>().unwrap(), Op::Shr);
		assert!("pow".parse::<Op>().is_err());
	}

	#[test]
	fn test_integer_ops() {
		let args = make_args(128, LaneType::I16, Op::Mul, "1,2,3", "4,5,6");
		assert_eq!(eval_with_register!(M128, &args).unwrap(), "<4, 10, 18, 0, 0, 0, 0, 0>");

		let args = make_args(64, LaneType::U8, Op::Shl, "1, 1, 1", "0, 1, 9");
		assert_eq!(eval_with_register!(M64, &args).unwrap(), "<1, 2, 0, 0, 0, 0, 0, 0>");

		let args = make_args(64, LaneType::I32, Op::Lt, "1,5", "2,2");
		assert_eq!(eval_with_register!(M64, &args).unwrap(), "<true, false>");
	}

	#[test]
	fn test_float_ops() {
		let args = make_args(256, LaneType::F64, Op::Div, "1,3", "2,4,1,1");
		assert_eq!(eval_with_register!(M256, &args).unwrap(), "<0.5, 0.75, 0, 0>");

		let args = make_args(128, LaneType::F32, Op::Shl, "1", "1");
		assert!(eval_with_register!(M128, &args).is_err());
	}

	#[test]
	fn test_bool_ops() {
		let args = make_args(64, LaneType::Bool, Op::Xor, "true,false,true", "true,true");
		assert_eq!(
			eval_with_register!(M64, &args).unwrap(),
			"<false, true, true, false, false, false, false, false>"
		);

		let args = make_args(64, LaneType::Bool, Op::Add, "true", "true");
		assert!(eval_with_register!(M64, &args).is_err());
	}

	#[test]
	fn test_invalid_input() {
		let args = make_args(64, LaneType::I16, Op::Add, "1,2,3,4,5", "1");
		assert!(eval_with_register!(M64, &args).is_err());

		let args = make_args(64, LaneType::I16, Op::Div, "1", "0");
		assert!(eval_with_register!(M64, &args).is_err());

		let args = make_args(64, LaneType::U8, Op::Add, "256", "0");
		assert!(eval_with_register!(M64, &args).is_err());
	}
}
