//! Minimum operand-stack depth oracle (`spec.md` §4.D "Ershov numbers").
//!
//! A binary tree shape abstracting away everything about an expression
//! except what the oracle needs: whether each leaf costs one stack slot,
//! and whether each binary node's operator commutes. Callers build a
//! `StackShape` from whatever expression AST they have and then ask it for
//! the minimum stack height and, for each binary node, whether the two
//! operands must be evaluated in right-then-left order with a trailing
//! `swap` to end up in the expected left-then-right order on the stack.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StackShape {
    /// A value already available in one instruction: a constant, a local
    /// load, or a call result.
    Leaf,
    Bin {
        commutative: bool,
        left: Box<StackShape>,
        right: Box<StackShape>,
    },
}

impl StackShape {
    #[must_use]
    pub fn leaf() -> Self {
        StackShape::Leaf
    }

    #[must_use]
    pub fn bin(commutative: bool, left: StackShape, right: StackShape) -> Self {
        StackShape::Bin {
            commutative,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The Ershov number: `h(leaf) = 1`; for a binary node, `h = hL + 1`
    /// when both operands need equal depth, else `h = max(hL, hR)`.
    #[must_use]
    pub fn height(&self) -> u32 {
        match self {
            StackShape::Leaf => 1,
            StackShape::Bin { left, right, .. } => {
                let hl = left.height();
                let hr = right.height();
                if hl == hr {
                    hl + 1
                } else {
                    hl.max(hr)
                }
            }
        }
    }

    /// Whether this node's operands should be evaluated right-first
    /// (higher-demand side first, to keep the running peak minimal), and
    /// whether a `swap` instruction is needed afterward to restore
    /// left-then-right operand order on the stack for a non-commutative
    /// operator.
    #[must_use]
    pub fn eval_plan(&self) -> EvalPlan {
        match self {
            StackShape::Leaf => EvalPlan {
                right_first: false,
                swap: false,
            },
            StackShape::Bin {
                commutative,
                left,
                right,
            } => {
                let hl = left.height();
                let hr = right.height();
                if hr > hl {
                    // Right demands more room: evaluate it first. A
                    // commutative operator can consume operands in
                    // whatever order they land; a non-commutative one
                    // needs a `swap` to put them back in source order.
                    EvalPlan {
                        right_first: true,
                        swap: !commutative,
                    }
                } else {
                    EvalPlan {
                        right_first: false,
                        swap: false,
                    }
                }
            }
        }
    }
}

pub struct EvalPlan {
    pub right_first: bool,
    pub swap: bool,
}

/// `stack_limit`: the computed maximum height, floored at 2 when the body
/// contains at least one call (`spec.md` §4.D — a call's argument push plus
/// its own leaf slot needs room for two even if the call itself is a leaf
/// in the surrounding expression), otherwise floored at 1.
#[must_use]
pub fn stack_limit(max_height: u32, has_call: bool) -> u32 {
    let floor = if has_call { 2 } else { 1 };
    max_height.max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_height_one() {
        assert_eq!(StackShape::leaf().height(), 1);
    }

    #[test]
    fn equal_height_operands_add_one() {
        let shape = StackShape::bin(true, StackShape::leaf(), StackShape::leaf());
        assert_eq!(shape.height(), 2);
    }

    #[test]
    fn unequal_height_operands_take_the_max() {
        let deep = StackShape::bin(true, StackShape::leaf(), StackShape::leaf());
        let shallow = StackShape::leaf();
        let shape = StackShape::bin(true, shallow, deep);
        assert_eq!(shape.height(), 2);
    }

    #[test]
    fn deeply_nested_left_spine_grows_linearly_when_balanced() {
        // ((leaf + leaf) + (leaf + leaf)): both subtrees height 2, so the
        // whole tree is height 3, not 4 — this is exactly what the oracle
        // exists to avoid.
        let sub = StackShape::bin(true, StackShape::leaf(), StackShape::leaf());
        let shape = StackShape::bin(true, sub.clone(), sub);
        assert_eq!(shape.height(), 3);
    }

    #[test]
    fn non_commutative_equal_height_operands_need_no_swap() {
        // hL == hR falls under the `hL >= hR` branch: L is still emitted
        // first, so the natural operand order already matches source order.
        let shape = StackShape::bin(false, StackShape::leaf(), StackShape::leaf());
        let plan = shape.eval_plan();
        assert!(!plan.right_first);
        assert!(!plan.swap);
    }

    #[test]
    fn commutative_equal_height_operands_need_no_swap() {
        let shape = StackShape::bin(true, StackShape::leaf(), StackShape::leaf());
        let plan = shape.eval_plan();
        assert!(!plan.swap);
    }

    #[test]
    fn non_commutative_deeper_right_operand_requires_a_swap() {
        let deep = StackShape::bin(true, StackShape::leaf(), StackShape::leaf());
        let shape = StackShape::bin(false, StackShape::leaf(), deep);
        let plan = shape.eval_plan();
        assert!(plan.right_first);
        assert!(plan.swap);
    }

    #[test]
    fn when_left_side_is_deeper_evaluation_stays_left_first() {
        let deep = StackShape::bin(true, StackShape::leaf(), StackShape::leaf());
        let shape = StackShape::bin(false, deep, StackShape::leaf());
        let plan = shape.eval_plan();
        assert!(!plan.right_first);
        assert!(!plan.swap);
    }

    #[test]
    fn stack_limit_floors_at_two_when_body_has_a_call() {
        assert_eq!(stack_limit(1, true), 2);
        assert_eq!(stack_limit(3, true), 3);
    }

    #[test]
    fn stack_limit_floors_at_one_without_a_call() {
        assert_eq!(stack_limit(0, false), 1);
    }
}
