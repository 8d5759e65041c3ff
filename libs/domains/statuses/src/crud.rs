use core_crud::patch::set_if_present;
use core_crud::{CrudEntity, SearchableField};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::entity::{ActiveModel, Entity};
use crate::models::{CreateStatus, Status, UpdateStatus};

impl CrudEntity for Entity {
    const NAME: &'static str = "status";
    const LABEL: &'static str = "Status";

    type Active = ActiveModel;
    type Dto = Status;
    type Create = CreateStatus;
    type Update = UpdateStatus;

    fn searchable_fields() -> Vec<SearchableField> {
        vec![SearchableField::partial("name", 1)]
    }

    fn new_active(input: CreateStatus) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            order: Set(input.order),
        }
    }

    fn patch_active(input: UpdateStatus) -> ActiveModel {
        ActiveModel {
            name: set_if_present(input.name),
            order: set_if_present(input.order),
            ..Default::default()
        }
    }
}
