//! Building the tree one token at a time.

use crate::{
    node::{NodeId, Tree},
    token::{Token, TokenKind},
};

/// Attach `token` to `tree` below `cursor` and return the new cursor.
///
/// Literal runs and self-closed tags become trailing children of the cursor.
/// An opening tag adds a surrounded node and descends into it; a closing tag
/// records itself on the cursor and climbs back to the parent. A closing tag
/// with no surrounded node to close is ignored.
pub fn attach(tree: &mut Tree, cursor: NodeId, token: &Token<'_>) -> NodeId {
    match token.kind {
        TokenKind::Literal => {
            tree.append_plain(cursor, token.text);
            cursor
        }
        TokenKind::SelfClosed => {
            tree.append_self_closed(cursor, token.text);
            cursor
        }
        TokenKind::Open => tree.append_surrounded(cursor, token.text),
        TokenKind::Close => {
            if tree.close(cursor, token.text) {
                tree.node(cursor).parent.unwrap_or(cursor)
            } else {
                cursor
            }
        }
    }
}
