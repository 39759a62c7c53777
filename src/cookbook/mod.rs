/*!
# charcomb cookbook

- a handful of small, tested recipes for building grammars


Main concepts:

# Parser
a parser is anything implementing [`Parse`](crate::Parse): a function from text to a
[`ParseResult`](crate::ParseResult). Parsers hold no state between calls, so build a
grammar once and reuse it.

# ParseResult
represents:
- whether the attempt succeeded
- the matched [`Value`](crate::Value) (or the [`ParseError`](crate::ParseError) on failure)
- the remaining, unconsumed input (always `""` after a failure)

# Combining
- `p + q` runs `p` then `q`, pairing their values, and stops at the first failure
- `p | q` tries `p`, and only if it fails tries `q` on the same input
- `p.map(f)` post-processes every result of `p`

```
use charcomb::prelude::*;

let yes_or_no = match_literal_sequence("yes".chars()).unwrap()
    | match_literal_sequence("no".chars()).unwrap();
assert!(yes_or_no.parse("no thanks").is_success());
```


# Testing

For tests during development of your grammars, using a logging framework for test
harnesses is encouraged

```toml
[dev-dependencies]
env_logger = "0.10"
test-log = {version = "0.2"}
```

This will allow the action of parsing to be traced with
```sh
RUST_LOG=cc=trace cargo test mytest -- --nocapture
```

*/

pub mod ch_1_getting_started;
pub mod ch_2_literal_sequences;
pub mod ch_3_enum_strum;
pub mod ch_4_post_processing;
