use std::fmt;

use crate::object::core::{Node, Object};

/// One pending piece of output while rendering.
enum Step<'a> {
    Object(&'a Object),
    Text(&'static str),
}

/// Renders `{a, b, {c}}` notation with an explicit work stack, so nesting
/// depth is limited by memory rather than by the call stack.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Step::Object(self)];

        while let Some(step) = pending.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Object(object) => match &*object.node {
                    Node::Atom(name) => f.write_str(name)?,
                    Node::Set(children) => {
                        f.write_str("{")?;
                        pending.push(Step::Text("}"));

                        for (index, child) in children.iter().enumerate().rev() {
                            pending.push(Step::Object(child));
                            if index > 0 {
                                pending.push(Step::Text(", "));
                            }
                        }
                    },
                },
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({self})")
    }
}
