//! The token arena: an owning store of [`Token`]s linked by index rather
//! than pointer, with a free list so backtracking paths can reclaim and
//! reuse storage instead of leaking it.
//!
//! This replaces the reference implementation's `up`/`right`/`downleft`/
//! `downright` weakref cross-links (designed for a GC'd host) with plain
//! `Option<TokenId>` indices into a `Vec`, per §3/§9 of the design notes.

use smol_str::SmolStr;

use crate::category::UNK;

/// An index into a [`TokenArena`]. `NonZeroU32`-free for simplicity; arena
/// slot 0 is never handed out as a live id (it is the arena's own sentinel
/// for "no id"), so `Option<TokenId>` still niches down to 4 bytes... this
/// crate does not rely on that niche, only on the index being stable for
/// the lifetime of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(u32);

impl TokenId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct TokenData {
    category: i32,
    text: Option<SmolStr>,
    parent: Option<TokenId>,
    next_sibling: Option<TokenId>,
    first_child: Option<TokenId>,
    last_child: Option<TokenId>,
    next_free: Option<TokenId>,
    line: u32,
    column: u32,
    live: bool,
}

/// A token as exposed to callers: a snapshot of one arena slot's fields.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub id: TokenId,
    pub category: i32,
    pub line: u32,
    pub column: u32,
}

/// Owning arena of tokens. Tree edges are indices into this arena; nothing
/// outside the arena owns a `Token`'s storage.
#[derive(Debug, Default)]
pub struct TokenArena {
    slots: Vec<TokenData>,
    free_head: Option<TokenId>,
    text_bytes: usize,
}

impl TokenArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a leaf token, reusing a free-list slot when one exists.
    pub fn alloc(&mut self, category: i32, text: Option<&str>, line: u32, column: u32) -> TokenId {
        let text = text.map(SmolStr::new);
        if let Some(t) = &text {
            self.text_bytes += t.len();
        }
        let data = TokenData {
            category,
            text,
            parent: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            next_free: None,
            line,
            column,
            live: true,
        };
        if let Some(id) = self.free_head {
            let slot = &mut self.slots[id.index()];
            self.free_head = slot.next_free;
            *slot = data;
            id
        } else {
            let id = TokenId(self.slots.len() as u32);
            self.slots.push(data);
            id
        }
    }

    /// Returns `id` to the free list. The caller must ensure `id` is not
    /// reachable from any live tree (the free-list invariant, §3).
    pub fn free(&mut self, id: TokenId) {
        let next_free = self.free_head;
        let slot = &mut self.slots[id.index()];
        slot.live = false;
        slot.text = None;
        slot.parent = None;
        slot.next_sibling = None;
        slot.first_child = None;
        slot.last_child = None;
        slot.next_free = next_free;
        self.free_head = Some(id);
    }

    /// Recursively releases `id` and every descendant back to the free
    /// list, used when a compounder driver discards a reduced internal
    /// node rather than pushing it back (§4.8's push-back invariant: only
    /// leaves are pushed back, internal nodes are destroyed).
    pub fn release_subtree(&mut self, id: TokenId) {
        let mut child = self.first_child(id);
        while let Some(c) = child {
            let next = self.next_sibling(c);
            self.release_subtree(c);
            child = next;
        }
        self.free(id);
    }

    pub fn category(&self, id: TokenId) -> i32 {
        self.slots[id.index()].category
    }

    pub fn set_category(&mut self, id: TokenId, category: i32) {
        self.slots[id.index()].category = category;
    }

    pub fn text(&self, id: TokenId) -> Option<&str> {
        self.slots[id.index()].text.as_deref()
    }

    pub fn set_text(&mut self, id: TokenId, text: &str) {
        let slot = &mut self.slots[id.index()];
        if let Some(old) = &slot.text {
            self.text_bytes -= old.len();
        }
        self.text_bytes += text.len();
        slot.text = Some(SmolStr::new(text));
    }

    pub fn line(&self, id: TokenId) -> u32 {
        self.slots[id.index()].line
    }

    pub fn column(&self, id: TokenId) -> u32 {
        self.slots[id.index()].column
    }

    pub fn parent(&self, id: TokenId) -> Option<TokenId> {
        self.slots[id.index()].parent
    }

    pub fn next_sibling(&self, id: TokenId) -> Option<TokenId> {
        self.slots[id.index()].next_sibling
    }

    pub fn first_child(&self, id: TokenId) -> Option<TokenId> {
        self.slots[id.index()].first_child
    }

    pub fn last_child(&self, id: TokenId) -> Option<TokenId> {
        self.slots[id.index()].last_child
    }

    /// Appends `child` as the last child of `parent`, O(1) via the cached
    /// tail pointer (§9: "siblings form a singly-linked list with a cached
    /// tail for O(1) append").
    pub fn append_child(&mut self, parent: TokenId, child: TokenId) {
        self.slots[child.index()].parent = Some(parent);
        self.slots[child.index()].next_sibling = None;
        if let Some(tail) = self.slots[parent.index()].last_child {
            self.slots[tail.index()].next_sibling = Some(child);
        } else {
            self.slots[parent.index()].first_child = Some(child);
        }
        self.slots[parent.index()].last_child = Some(child);
    }

    /// Builds a new internal node of category `category` wrapping
    /// `children` in order, the `node(ruleId, c1, ..., cn)` helper used by
    /// every reduction action (§4.9) and every absorption stage (§4.5-4.7).
    pub fn node(&mut self, category: i32, children: &[TokenId]) -> TokenId {
        let (line, column) = children
            .first()
            .map(|c| (self.line(*c), self.column(*c)))
            .unwrap_or((0, 0));
        let parent = self.alloc(category, None, line, column);
        for &child in children {
            self.append_child(parent, child);
        }
        parent
    }

    /// Iterates the direct children of `id` in source order.
    pub fn children(&self, id: TokenId) -> ChildIter<'_> {
        ChildIter {
            arena: self,
            next: self.first_child(id),
        }
    }

    pub fn token_count(&self) -> usize {
        self.slots.iter().filter(|s| s.live).count()
    }

    pub fn text_bytes(&self) -> usize {
        self.text_bytes
    }

    pub fn view(&self, id: TokenId) -> Token {
        Token {
            id,
            category: self.category(id),
            line: self.line(id),
            column: self.column(id),
        }
    }

    /// Clears every slot and the free list, for `reset` between parses.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.text_bytes = 0;
    }
}

pub struct ChildIter<'a> {
    arena: &'a TokenArena,
    next: Option<TokenId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = TokenId;

    fn next(&mut self) -> Option<TokenId> {
        let current = self.next?;
        self.next = self.arena.next_sibling(current);
        Some(current)
    }
}

/// Sentinel category for a not-yet-assigned token, distinct from the
/// runtime `UNK` category assigned to unrecognized cmavo.
pub const UNSET: i32 = UNK - 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::UI_612;

    #[test]
    fn alloc_and_append_child_builds_a_tree() {
        let mut arena = TokenArena::new();
        let leaf_a = arena.alloc(UI_612, Some("ui"), 1, 0);
        let leaf_b = arena.alloc(UI_612, Some("ui"), 1, 3);
        let parent = arena.node(UI_612, &[leaf_a, leaf_b]);

        let children: Vec<_> = arena.children(parent).collect();
        assert_eq!(children, vec![leaf_a, leaf_b]);
        assert_eq!(arena.parent(leaf_a), Some(parent));
        assert_eq!(arena.parent(leaf_b), Some(parent));
    }

    #[test]
    fn free_list_reuses_slots() {
        let mut arena = TokenArena::new();
        let a = arena.alloc(UI_612, None, 0, 0);
        arena.free(a);
        let b = arena.alloc(UI_612, None, 0, 0);
        assert_eq!(a, b, "freed slot should be reused rather than growing the arena");
        assert_eq!(arena.token_count(), 1);
    }

    #[test]
    fn release_subtree_frees_every_descendant() {
        let mut arena = TokenArena::new();
        let leaf = arena.alloc(UI_612, None, 0, 0);
        let mid = arena.node(UI_612, &[leaf]);
        let top = arena.node(UI_612, &[mid]);
        assert_eq!(arena.token_count(), 3);
        arena.release_subtree(top);
        assert_eq!(arena.token_count(), 0);
    }

    #[test]
    fn text_bytes_tracks_interned_text() {
        let mut arena = TokenArena::new();
        arena.alloc(UI_612, Some("coi"), 1, 0);
        assert_eq!(arena.text_bytes(), 3);
    }
}
