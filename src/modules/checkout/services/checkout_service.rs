use crate::config::CheckoutConfig;
use crate::core::{AppError, Result};
use crate::modules::checkout::models::{CheckoutRequest, HelperOptions, RedirectForm};

use super::helper::TwoCheckoutHelper;

/// Turns storefront checkout requests into redirect forms
#[derive(Debug, Clone)]
pub struct CheckoutService {
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new(config: CheckoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Builds the redirect form for `request`
    ///
    /// The vendor account comes from the request, falling back to the
    /// configured one; a request with neither is rejected.
    pub fn build_form(&self, request: &CheckoutRequest) -> Result<RedirectForm> {
        let account = non_blank(request.account.as_deref())
            .or_else(|| non_blank(self.config.account.as_deref()))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "No vendor account for order {}: set `account` or TWOCHECKOUT_SID",
                    request.order
                ))
            })?;

        let mut options = HelperOptions::new(request.amount.clone(), request.currency.clone())
            .integration_mode(self.config.mode);
        options.test = request.test;

        let mut helper = TwoCheckoutHelper::new(request.order.clone(), account, options)
            .with_service_url(self.config.service_url.clone());

        if let Some(customer) = &request.customer {
            helper.customer(customer);
        }
        if let Some(address) = &request.billing_address {
            helper.billing_address(address);
        }
        if let Some(address) = &request.shipping_address {
            helper.shipping_address(address);
        }
        for line_item in &request.line_items {
            helper.third_party_cart(line_item);
        }

        if let Some(invoice) = &request.invoice {
            helper.invoice(invoice);
        }
        if let Some(url) = &request.return_url {
            helper.return_url(url);
        }
        if let Some(url) = &request.notify_url {
            helper.notify_url(url);
        }
        if let Some(cart_type) = &request.cart_type {
            helper.cart_type(cart_type);
        }
        if let Some(step) = &request.purchase_step {
            helper.purchase_step(step);
        }

        tracing::info!(
            order = %request.order,
            fields = helper.fields().len(),
            line_items = helper.line_item_count(),
            "Built checkout redirect form"
        );

        Ok(helper.into_form())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
