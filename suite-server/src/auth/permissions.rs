//! Permission Definitions
//!
//! Fixed role table. Roles are not configurable; every operator of a role
//! gets the same permission set.

use shared::models::UserRole;

// === Stock ===
pub const STOCK_CATALOG: &str = "stock:catalog";
pub const STOCK_ADJUST: &str = "stock:adjust";
pub const STOCK_ORDER: &str = "stock:order";
pub const STOCK_DELIVER: &str = "stock:deliver";

// === Catering ===
pub const MEALS_MANAGE: &str = "meals:manage";
pub const VOUCHERS_ISSUE: &str = "vouchers:issue";
pub const VOUCHERS_CONSUME: &str = "vouchers:consume";
pub const VOUCHERS_CANCEL: &str = "vouchers:cancel";

// === Lodging ===
pub const APARTMENTS_MANAGE: &str = "apartments:manage";
pub const APARTMENTS_RECEPTION: &str = "apartments:reception";
pub const LAUNDRY_MANAGE: &str = "laundry:manage";

// === Staff / cash / reporting ===
pub const STAFF_MANAGE: &str = "staff:manage";
pub const STAFF_ATTENDANCE: &str = "staff:attendance";
pub const CASH_VIEW: &str = "cash:view";
pub const CASH_DEPOSIT: &str = "cash:deposit";
pub const CASH_EXPENSE: &str = "cash:expense";
pub const REPORTS_VIEW: &str = "reports:view";

// === Administration ===
pub const USERS_MANAGE: &str = "users:manage";
pub const SITES_SWITCH: &str = "sites:switch";

/// Every known permission
pub const ALL_PERMISSIONS: &[&str] = &[
    STOCK_CATALOG,
    STOCK_ADJUST,
    STOCK_ORDER,
    STOCK_DELIVER,
    MEALS_MANAGE,
    VOUCHERS_ISSUE,
    VOUCHERS_CONSUME,
    VOUCHERS_CANCEL,
    APARTMENTS_MANAGE,
    APARTMENTS_RECEPTION,
    LAUNDRY_MANAGE,
    STAFF_MANAGE,
    STAFF_ATTENDANCE,
    CASH_VIEW,
    CASH_DEPOSIT,
    CASH_EXPENSE,
    REPORTS_VIEW,
    USERS_MANAGE,
    SITES_SWITCH,
];

const BOSS_PERMISSIONS: &[&str] = &[
    STOCK_CATALOG,
    STOCK_ADJUST,
    STOCK_ORDER,
    STOCK_DELIVER,
    VOUCHERS_CONSUME,
    VOUCHERS_CANCEL,
    APARTMENTS_MANAGE,
    APARTMENTS_RECEPTION,
    LAUNDRY_MANAGE,
    STAFF_MANAGE,
    STAFF_ATTENDANCE,
    CASH_VIEW,
    CASH_DEPOSIT,
    REPORTS_VIEW,
    USERS_MANAGE,
    SITES_SWITCH,
];

const MANAGER_PERMISSIONS: &[&str] = &[
    STOCK_ADJUST,
    VOUCHERS_CANCEL,
    STAFF_MANAGE,
    STAFF_ATTENDANCE,
    CASH_VIEW,
    CASH_EXPENSE,
    REPORTS_VIEW,
];

const CHEF_PERMISSIONS: &[&str] = &[STOCK_ORDER, MEALS_MANAGE, VOUCHERS_CONSUME, STAFF_ATTENDANCE];

const STOREKEEPER_PERMISSIONS: &[&str] = &[STOCK_ADJUST, STOCK_DELIVER, STAFF_ATTENDANCE];

const CASHIER_PERMISSIONS: &[&str] = &[VOUCHERS_ISSUE, VOUCHERS_CONSUME, STAFF_ATTENDANCE];

const RECEPTIONIST_PERMISSIONS: &[&str] = &[APARTMENTS_RECEPTION, LAUNDRY_MANAGE, STAFF_ATTENDANCE];

/// Permissions granted to a role
pub fn role_permissions(role: UserRole) -> &'static [&'static str] {
    match role {
        UserRole::Boss => BOSS_PERMISSIONS,
        UserRole::Manager => MANAGER_PERMISSIONS,
        UserRole::HeadChef => CHEF_PERMISSIONS,
        UserRole::Storekeeper => STOREKEEPER_PERMISSIONS,
        UserRole::Cashier => CASHIER_PERMISSIONS,
        UserRole::Receptionist => RECEPTIONIST_PERMISSIONS,
    }
}

pub fn has_permission(role: UserRole, permission: &str) -> bool {
    role_permissions(role).contains(&permission)
}

/// Validate if a permission string is valid
pub fn is_valid_permission(permission: &str) -> bool {
    ALL_PERMISSIONS.contains(&permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_granted_permission_is_known() {
        for role in UserRole::ALL {
            for p in role_permissions(role) {
                assert!(is_valid_permission(p), "{role} has unknown {p}");
            }
        }
    }

    #[test]
    fn attendance_is_open_to_all_roles() {
        for role in UserRole::ALL {
            assert!(has_permission(role, STAFF_ATTENDANCE));
        }
    }

    #[test]
    fn voucher_issue_is_cashier_only() {
        let holders: Vec<UserRole> = UserRole::ALL
            .into_iter()
            .filter(|r| has_permission(*r, VOUCHERS_ISSUE))
            .collect();
        assert_eq!(holders, vec![UserRole::Cashier]);
    }

    #[test]
    fn meal_planning_is_chef_only() {
        assert!(has_permission(UserRole::HeadChef, MEALS_MANAGE));
        assert!(!has_permission(UserRole::Boss, MEALS_MANAGE));
    }

    #[test]
    fn cash_split_between_boss_and_manager() {
        assert!(has_permission(UserRole::Boss, CASH_DEPOSIT));
        assert!(!has_permission(UserRole::Boss, CASH_EXPENSE));
        assert!(has_permission(UserRole::Manager, CASH_EXPENSE));
        assert!(!has_permission(UserRole::Manager, CASH_DEPOSIT));
        assert!(!has_permission(UserRole::Cashier, CASH_VIEW));
    }

    #[test]
    fn stock_roles() {
        assert!(has_permission(UserRole::Storekeeper, STOCK_ADJUST));
        assert!(has_permission(UserRole::Manager, STOCK_ADJUST));
        assert!(!has_permission(UserRole::HeadChef, STOCK_ADJUST));
        assert!(has_permission(UserRole::HeadChef, STOCK_ORDER));
        assert!(!has_permission(UserRole::Storekeeper, STOCK_ORDER));
        assert!(has_permission(UserRole::Storekeeper, STOCK_DELIVER));
        assert!(!has_permission(UserRole::Manager, STOCK_CATALOG));
    }
}
