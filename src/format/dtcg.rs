//! DTCG formatter: delegates entirely to the serializer.

use crate::error::Result;
use crate::options::FormatOptions;
use crate::serialize;
use crate::token::Token;

pub fn format(tokens: &[Token], opts: &FormatOptions) -> Result<String> {
    serialize::to_pretty_json(tokens, opts)
}
