//! Contact section: three-field form with a submit button.

use super::{Action, NodeKind, ViewNode};
use crate::data::{FieldError, FormField, FormState, Section};

/// Inputs of the contact view
pub struct ContactProps<'a> {
    pub form: &'a FormState,
    /// Cursor (row, col) per field, in `FormField::ALL` order
    pub cursors: [(usize, usize); 3],
    pub error: Option<&'a FieldError>,
}

pub fn render(props: &ContactProps<'_>) -> ViewNode {
    let mut form = ViewNode::new(NodeKind::Form).class("contact-form");

    for (idx, field) in FormField::ALL.into_iter().enumerate() {
        let class = if field.multiline() { "textarea" } else { "input" };
        form = form.child(
            ViewNode::new(NodeKind::Field {
                field,
                value: props.form.value(field).to_string(),
                cursor: props.cursors[idx],
            })
            .class(class)
            .text(field.placeholder()),
        );

        if let Some(error) = props.error.filter(|e| e.field == field) {
            form = form.child(
                ViewNode::new(NodeKind::FieldError { field })
                    .class("field-error")
                    .text(error.message.clone()),
            );
        }
    }

    form = form.child(
        ViewNode::new(NodeKind::Button {
            action: Action::Submit,
        })
        .text("Send Message"),
    );

    ViewNode::new(NodeKind::Section {
        section: Section::Contact,
    })
    .class("contact")
    .child(ViewNode::new(NodeKind::Heading { level: 2 }).text("Get In Touch"))
    .child(
        ViewNode::new(NodeKind::Block)
            .class("contact-content container")
            .child(form),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_carry_values() {
        let form = FormState {
            name: "Ada".to_string(),
            ..FormState::default()
        };
        let view = render(&ContactProps {
            form: &form,
            cursors: [(0, 3), (0, 0), (0, 0)],
            error: None,
        });

        let fields = view.find_all(|n| matches!(n.kind, NodeKind::Field { .. }));
        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields[0].kind,
            NodeKind::Field {
                field: FormField::Name,
                value: "Ada".to_string(),
                cursor: (0, 3),
            }
        );
        assert_eq!(fields[2].text.as_deref(), Some("Your Message"));
        assert_eq!(view.actions().last(), Some(&Action::Submit));
    }

    #[test]
    fn test_error_placed_after_its_field() {
        let form = FormState::default();
        let error = FieldError {
            field: FormField::Email,
            message: "Please fill out this field.".to_string(),
        };
        let view = render(&ContactProps {
            form: &form,
            cursors: [(0, 0); 3],
            error: Some(&error),
        });

        let form_node = &view.find_all(|n| matches!(n.kind, NodeKind::Form))[0];
        assert!(matches!(
            form_node.children[2].kind,
            NodeKind::FieldError {
                field: FormField::Email
            }
        ));
    }
}
