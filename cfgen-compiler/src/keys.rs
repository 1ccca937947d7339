//! Promotion of key fields out of a dynamic object's attrs.

use cfgen_ir::DynamicObject;
use tracing::debug;

/// Move each declared key's field out of `attrs` and into its key.
///
/// For every key that has not been matched yet, the first field with the same
/// name donates its description to the key and is removed from `attrs`. The
/// remaining attrs keep their order. A key with no matching field keeps no
/// description.
pub fn restructure_keys(objects: &mut [DynamicObject]) {
    for object in objects {
        promote_keys(object);
    }
}

fn promote_keys(object: &mut DynamicObject) {
    for key in object.keys.iter_mut().filter(|k| !k.is_matched()) {
        match object.attrs.iter().position(|field| field.name == key.name) {
            Some(index) => {
                let field = object.attrs.remove(index);
                key.description = Some(field.description);
            }
            None => debug!(
                object = %object.name,
                key = %key.name,
                "key names no field of its list"
            ),
        }
    }
}
