mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the direct parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    for child in root.content.children() {
        if child.id == id {
            return Some(root);
        }
        if let Some(found) = find_parent(child, id) {
            return Some(found);
        }
    }

    None
}

/// Ancestor chain of an element, nearest first. Does not include the element itself.
pub fn ancestors(root: &Element, id: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = id.to_string();
    while let Some(parent) = find_parent(root, &current) {
        chain.push(parent.id.clone());
        current = parent.id.clone();
    }
    chain
}

/// IDs of every element matching the predicate, in document order.
pub fn collect_matching(root: &Element, pred: &dyn Fn(&Element) -> bool) -> Vec<String> {
    let mut result = Vec::new();
    collect_matching_recursive(root, pred, &mut result);
    result
}

fn collect_matching_recursive(
    element: &Element,
    pred: &dyn Fn(&Element) -> bool,
    result: &mut Vec<String>,
) {
    if pred(element) {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_matching_recursive(child, pred, result);
    }
}
