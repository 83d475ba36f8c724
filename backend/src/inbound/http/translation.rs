//! Request model to command translation.
//!
//! Each pairing is declared once with `translate!`. The generated `From`
//! impl destructures the request without `..` and builds the command
//! without `..`, so a field added on either side that is neither mapped
//! nor listed under `drop` fails to compile. Translation only renames and
//! wraps keys; business rules stay with the entities.

use crate::domain::commands::{
    AddFoodTruckTagCommand, AddSocialMediaAccountCommand, CreateFoodTruckCommand,
    CreateFoodTruckReviewCommand, CreateFoodTruckScheduleCommand, CreateLocationCommand,
    CreateSocialMediaPlatformCommand, CreateTagCommand, RescheduleFoodTruckScheduleCommand,
    UpdateFoodTruckCommand, UpdateLocationCommand,
};

use super::models::{
    AddFoodTruckTagModel, AddSocialMediaAccountModel, CreateFoodTruckModel,
    CreateFoodTruckReviewModel, CreateFoodTruckScheduleModel, CreateLocationModel,
    CreateSocialMediaPlatformModel, CreateTagModel, RescheduleFoodTruckScheduleModel,
    UpdateFoodTruckModel, UpdateLocationModel,
};

macro_rules! translate {
    ($(
        $request:ident => $command:ident {
            $($source:ident => $target:ident),* $(,)?
        } $(drop { $($dropped:ident),* $(,)? })?
    )*) => {$(
        impl From<$request> for $command {
            fn from(request: $request) -> Self {
                let $request { $($source,)* $($($dropped: _,)*)? } = request;
                Self { $($target: $source.into(),)* }
            }
        }
    )*};
}

translate! {
    CreateFoodTruckModel => CreateFoodTruckCommand {
        name => name,
        description => description,
        website => website,
    }

    UpdateFoodTruckModel => UpdateFoodTruckCommand {
        food_truck_id => food_truck_id,
        name => name,
        description => description,
        website => website,
    }

    AddFoodTruckTagModel => AddFoodTruckTagCommand {
        food_truck_id => food_truck_id,
        tag_id => tag_id,
    }

    CreateFoodTruckScheduleModel => CreateFoodTruckScheduleCommand {
        food_truck_id => food_truck_id,
        location_id => location_id,
        start_time => scheduled_start,
        end_time => scheduled_end,
    }

    RescheduleFoodTruckScheduleModel => RescheduleFoodTruckScheduleCommand {
        food_truck_id => food_truck_id,
        schedule_id => schedule_id,
        start_time => scheduled_start,
        end_time => scheduled_end,
    }

    CreateFoodTruckReviewModel => CreateFoodTruckReviewCommand {
        food_truck_id => food_truck_id,
        review_date => review_date,
        rating => rating,
        comments => details,
    }

    AddSocialMediaAccountModel => AddSocialMediaAccountCommand {
        food_truck_id => food_truck_id,
        platform_id => platform_id,
        account_name => account_name,
    }

    CreateTagModel => CreateTagCommand {
        text => text,
    }

    CreateLocationModel => CreateLocationCommand {
        name => name,
        street_address => street_address,
        city => city,
        state => state,
        zip_code => zip_code,
    }

    UpdateLocationModel => UpdateLocationCommand {
        location_id => location_id,
        name => name,
        street_address => street_address,
        city => city,
        state => state,
        zip_code => zip_code,
    }

    CreateSocialMediaPlatformModel => CreateSocialMediaPlatformCommand {
        name => name,
        url_template => url_template,
    }
}
