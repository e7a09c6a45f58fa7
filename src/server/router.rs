use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            BookingDto, BookingStatusDto, CreateBookingDto, ReleasedBookingDto, UserSummaryDto,
        },
        lot::{
            CreateLotDto, LotAvailabilityDto, LotDetailsDto, LotDto, SetCapacityDto,
            SpotDto, SpotOccupantDto, SpotStatusDto, UpdateLotDto,
        },
        report::{AdminSummaryDto, LotReportDto, ReportDto},
        user::{RegisterUserDto, RoleDto, UserDto},
    },
    server::{
        controller::{admin, booking, export, lot, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "parkbook", description = "Parking lot booking API"),
    paths(
        user::register_user,
        lot::get_available_lots,
        lot::create_lot,
        lot::get_all_lots,
        lot::get_lot_details,
        lot::update_lot,
        lot::set_capacity,
        lot::delete_lot,
        booking::create_booking,
        booking::get_bookings,
        booking::release_booking,
        booking::get_user_summary,
        export::export_csv,
        admin::get_summary,
        admin::get_users,
        admin::get_report,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        RoleDto,
        UserDto,
        RegisterUserDto,
        CreateLotDto,
        UpdateLotDto,
        SetCapacityDto,
        LotDto,
        LotAvailabilityDto,
        LotDetailsDto,
        SpotDto,
        SpotStatusDto,
        SpotOccupantDto,
        CreateBookingDto,
        BookingDto,
        BookingStatusDto,
        ReleasedBookingDto,
        UserSummaryDto,
        LotReportDto,
        ReportDto,
        AdminSummaryDto,
    )),
    tags(
        (name = "user", description = "User registration"),
        (name = "lot", description = "Parking lots and spots"),
        (name = "booking", description = "Spot reservation and release"),
        (name = "export", description = "Booking history export"),
        (name = "admin", description = "Admin dashboard and reports"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(user::register_user))
        .route("/api/lots", get(lot::get_available_lots))
        .route(
            "/api/admin/lots",
            post(lot::create_lot).get(lot::get_all_lots),
        )
        .route(
            "/api/admin/lots/{lot_id}",
            get(lot::get_lot_details)
                .put(lot::update_lot)
                .delete(lot::delete_lot),
        )
        .route("/api/admin/lots/{lot_id}/capacity", put(lot::set_capacity))
        .route(
            "/api/bookings",
            post(booking::create_booking).get(booking::get_bookings),
        )
        .route(
            "/api/bookings/{booking_id}/release",
            put(booking::release_booking),
        )
        .route("/api/user/summary", get(booking::get_user_summary))
        .route("/api/export-csv", post(export::export_csv))
        .route("/api/admin/summary", get(admin::get_summary))
        .route("/api/admin/users", get(admin::get_users))
        .route("/api/admin/reports", get(admin::get_report))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
