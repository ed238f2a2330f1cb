use crate::config::DEFAULT_SERVICE_URL;
use crate::modules::checkout::models::{FieldMap, HelperOptions, RedirectForm, FORM_METHOD};

use super::mappings::{self, Mapping};

/// Builds the hidden fields of a hosted checkout redirect
///
/// Every setter is total: attributes without a form field are dropped, blank
/// values are skipped, nothing ever fails.
///
/// ```
/// use checkout_redirect::checkout::{HelperOptions, TwoCheckoutHelper};
///
/// let helper = TwoCheckoutHelper::new(
///     "order-500",
///     "cody@example.com",
///     HelperOptions::new("5.00", "USD"),
/// );
/// assert_eq!(helper.fields().get("total"), Some("5.00"));
/// assert_eq!(helper.fields().get("demo"), Some("Y"));
/// ```
#[derive(Debug, Clone)]
pub struct TwoCheckoutHelper {
    fields: FieldMap,
    line_item_count: usize,
    service_url: String,
}

impl TwoCheckoutHelper {
    pub fn new(order: impl Into<String>, account: impl Into<String>, options: HelperOptions) -> Self {
        let mode = options.effective_mode();

        let mut helper = Self {
            fields: FieldMap::new(),
            line_item_count: 0,
            service_url: DEFAULT_SERVICE_URL.to_string(),
        };

        helper.add_field(mappings::ORDER, order);
        helper.add_field(mappings::ACCOUNT, account);
        helper.add_field(mappings::AMOUNT, options.amount);
        helper.add_field(mappings::CURRENCY, options.currency);

        if mode.is_test() {
            tracing::debug!(%mode, "Marking checkout as demo sale");
            helper.add_field(mappings::DEMO, mappings::DEMO_ENABLED);
        }

        helper
    }

    /// Posts the form to `service_url` instead of the default checkout page
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name, value);
    }

    pub fn currency(&mut self, currency: impl Into<String>) {
        self.add_field(mappings::CURRENCY, currency);
    }

    /// Cart identifier, required alongside third party cart line items
    pub fn invoice(&mut self, invoice: impl Into<String>) {
        self.add_field(mappings::INVOICE, invoice);
    }

    pub fn return_url(&mut self, url: impl Into<String>) {
        self.add_field(mappings::RETURN_URL, url);
    }

    pub fn notify_url(&mut self, url: impl Into<String>) {
        self.add_field(mappings::NOTIFY_URL, url);
    }

    /// Shopping cart the sale was referred from
    pub fn cart_type(&mut self, cart_type: impl Into<String>) {
        self.add_field(mappings::CART_TYPE, cart_type);
    }

    /// Checkout page step the buyer lands on, e.g. `payment-method`
    pub fn purchase_step(&mut self, step: impl Into<String>) {
        self.add_field(mappings::PURCHASE_STEP, step);
    }

    /// Writes the card holder name, email and phone
    ///
    /// `first_name` and `last_name` are joined with a space. When only one of
    /// them is given it is used on its own.
    pub fn customer<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut first_name = None;
        let mut last_name = None;

        for (key, value) in params {
            match key.as_ref() {
                "first_name" => first_name = Some(value.into()),
                "last_name" => last_name = Some(value.into()),
                other => self.add_mapped(mappings::CUSTOMER, "customer", other, value.into()),
            }
        }

        let name = [first_name, last_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.add_field(mappings::CARD_HOLDER_NAME, name);
    }

    pub fn billing_address<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.add_mapped_all(mappings::BILLING_ADDRESS, "billing_address", params);
    }

    /// Like `billing_address`, plus the recipient `name`
    pub fn shipping_address<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.add_mapped_all(mappings::SHIPPING_ADDRESS, "shipping_address", params);
    }

    /// Dispatches an address-like setter by name
    ///
    /// Names other than `billing_address` and `shipping_address` (for example
    /// `company_address`) have no form fields and leave the map untouched.
    pub fn address<I, K, V>(&mut self, kind: &str, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        match kind {
            "billing_address" => self.billing_address(params),
            "shipping_address" => self.shipping_address(params),
            _ => tracing::debug!(setter = kind, "Ignoring setter without form fields"),
        }
    }

    /// Adds one third party cart line item
    ///
    /// Each call takes the next index starting at 1, so attributes split over
    /// two calls land on two line items.
    pub fn third_party_cart<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.line_item_count += 1;
        let index = self.line_item_count;

        for (key, value) in params {
            match mappings::line_item_field(key.as_ref(), index) {
                Some(field) => self.add_field(field, value),
                None => tracing::debug!(
                    attribute = key.as_ref(),
                    line_item = index,
                    "Dropping unknown line item attribute"
                ),
            }
        }
    }

    /// Number of line items added so far
    pub fn line_item_count(&self) -> usize {
        self.line_item_count
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn into_fields(self) -> FieldMap {
        self.fields
    }

    pub fn form_method(&self) -> &'static str {
        FORM_METHOD
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn into_form(self) -> RedirectForm {
        RedirectForm::new(self.service_url, self.fields)
    }

    fn add_mapped_all<I, K, V>(&mut self, mapping: Mapping, setter: &str, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.add_mapped(mapping, setter, key.as_ref(), value.into());
        }
    }

    fn add_mapped(&mut self, mapping: Mapping, setter: &str, key: &str, value: String) {
        match mappings::translate(mapping, key) {
            Some(field) => self.add_field(field, value),
            None => tracing::debug!(setter, attribute = key, "Dropping unknown attribute"),
        }
    }
}
