//! Project intake form.
//!
//! # Responsibility
//! - Read the three form fields and validate them as one unit.
//! - Clear the fields and hand validated input to the store.
//!
//! # Invariants
//! - A rejected submit leaves every field value untouched.
//! - Fields are cleared only after all three checks pass, before the store
//!   add runs.

use crate::store::project_store::ProjectStore;
use crate::surface::{NodeId, RenderSurface};
use crate::validation::{parse_people, validate, FieldValue, InputPolicy, Validatable};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Message shown when any field fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Input values are not valid";

/// The board's add-project form.
pub struct ProjectInput<S: RenderSurface> {
    surface: Rc<RefCell<S>>,
    node: NodeId,
    title_field: NodeId,
    description_field: NodeId,
    people_field: NodeId,
    policy: InputPolicy,
}

impl<S: RenderSurface> ProjectInput<S> {
    /// Mounts the form with its three input fields under `root`.
    pub fn mount(surface: Rc<RefCell<S>>, root: NodeId, policy: InputPolicy) -> Self {
        let (node, title_field, description_field, people_field) = {
            let mut surface = surface.borrow_mut();
            let node = surface.create_element("form");
            surface.set_attribute(node, "id", "user-input");
            surface.append_child(root, node);
            let title_field = mount_field(&mut *surface, node, "title");
            let description_field = mount_field(&mut *surface, node, "description");
            let people_field = mount_field(&mut *surface, node, "people");
            (node, title_field, description_field, people_field)
        };

        Self {
            surface,
            node,
            title_field,
            description_field,
            people_field,
            policy,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Writes all three field values, as a user typing into the form would.
    pub fn fill(&self, title: &str, description: &str, people: &str) {
        let mut surface = self.surface.borrow_mut();
        surface.set_field_value(self.title_field, title);
        surface.set_field_value(self.description_field, description);
        surface.set_field_value(self.people_field, people);
    }

    /// Handles a submit gesture.
    ///
    /// On any validation failure the user is alerted and the fields keep
    /// their values. On success the fields are cleared first, then the
    /// project is added, which notifies the lists synchronously.
    pub fn submit(&self, store: &mut ProjectStore) {
        let (title, description, people_raw) = {
            let surface = self.surface.borrow();
            (
                surface.field_value(self.title_field),
                surface.field_value(self.description_field),
                surface.field_value(self.people_field),
            )
        };
        let people = parse_people(&people_raw);

        if !self.gathered_input_is_valid(&title, &description, people) {
            debug!("event=submit_rejected module=component status=ok");
            self.surface.borrow_mut().alert(INVALID_INPUT_MESSAGE);
            return;
        }

        {
            let mut surface = self.surface.borrow_mut();
            surface.set_field_value(self.title_field, "");
            surface.set_field_value(self.description_field, "");
            surface.set_field_value(self.people_field, "");
        }
        // The people bounds were just checked against the policy, so the
        // cast to the model's unsigned count is lossless.
        store.add(title, description, people as u32);
    }

    fn gathered_input_is_valid(&self, title: &str, description: &str, people: f64) -> bool {
        let title_validatable = Validatable {
            value: FieldValue::Text(title.to_string()),
            required: true,
            ..Validatable::default()
        };
        let description_validatable = Validatable {
            value: FieldValue::Text(description.to_string()),
            required: true,
            min_length: Some(self.policy.description_min_length),
            max_length: Some(self.policy.description_max_length),
            ..Validatable::default()
        };
        let people_validatable = Validatable {
            value: FieldValue::Number(people),
            required: true,
            min: Some(self.policy.people_min),
            max: Some(self.policy.people_max),
            ..Validatable::default()
        };

        validate(&title_validatable)
            && validate(&description_validatable)
            && validate(&people_validatable)
    }
}

fn mount_field<S: RenderSurface>(surface: &mut S, form: NodeId, id: &str) -> NodeId {
    let field = surface.create_element("input");
    surface.set_attribute(field, "id", id);
    surface.append_child(form, field);
    field
}
