//! The rack's prefix set: every string (including the empty one) spellable
//! left-to-right from rack tokens that is also a valid dictionary prefix.
//!
//! Built by depth-first extension with backtracking: each recursive step
//! consumes one tile from a working rack copy, recurses only while the
//! accumulated string stays a valid prefix, then returns the tile.

use std::collections::HashSet;

use crate::game::rack::Rack;
use crate::game::tile::PlacedTile;
use crate::lexicon::Lexicon;

/// All rack-spellable dictionary prefixes. A resident blank contributes all
/// 26 letters; blank-backed entries stay distinguishable from natural ones
/// so downstream scoring knows they are worthless.
pub fn rack_prefixes(rack: &Rack, lexicon: &Lexicon) -> Vec<Vec<PlacedTile>> {
    let mut results = HashSet::new();
    let mut working = rack.clone();
    let mut prefix = Vec::new();
    let mut text = String::new();
    extend(&mut prefix, &mut text, &mut working, lexicon, &mut results);
    results.into_iter().collect()
}

fn extend(
    prefix: &mut Vec<PlacedTile>,
    text: &mut String,
    rack: &mut Rack,
    lexicon: &Lexicon,
    results: &mut HashSet<Vec<PlacedTile>>,
) {
    if !lexicon.is_prefix(text) {
        return;
    }
    results.insert(prefix.clone());
    for cand in rack.candidate_letters() {
        prefix.push(cand);
        text.push(cand.letter);
        rack.remove_placed(cand);

        extend(prefix, text, rack, lexicon, results);

        rack.push(cand.as_rack_tile());
        text.pop();
        prefix.pop();
    }
}
