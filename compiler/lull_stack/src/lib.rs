//! Keeps recursive descent from overflowing the thread stack.
//!
//! Lull programs nest expressions and call themselves as deeply as they like.
//! The parser and the interpreter each wrap their one recursive entry point
//! (`parse_expr`, `eval_expr`) in [`ensure_sufficient_stack`], which moves
//! execution onto a freshly allocated segment once the current one runs low.
//! On `wasm32` there is no way to switch stacks and the closure runs as is.

/// Headroom below which a new segment is allocated.
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, switching to a new stack segment first when little is left.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
    }
    #[cfg(target_arch = "wasm32")]
    {
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;

    /// A right-leaning chain like `1 + (1 + (1 + ...))`.
    enum Chain {
        Leaf,
        Link(Box<Chain>),
    }

    fn build(depth: usize) -> Chain {
        (0..depth).fold(Chain::Leaf, |inner, _| Chain::Link(Box::new(inner)))
    }

    fn count(chain: &Chain) -> usize {
        ensure_sufficient_stack(|| match chain {
            Chain::Leaf => 0,
            Chain::Link(inner) => count(inner) + 1,
        })
    }

    #[test]
    fn test_returns_closure_value() {
        let value: Option<&str> = ensure_sufficient_stack(|| Some("lull"));
        assert_eq!(value, Some("lull"));
    }

    #[test]
    fn test_walks_deeply_nested_chain() {
        let mut chain = build(150_000);
        assert_eq!(count(&chain), 150_000);

        // Drop iteratively; the derived drop would recurse.
        while let Chain::Link(inner) = chain {
            chain = *inner;
        }
    }
}
