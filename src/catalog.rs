//! Built-in case bank and catalog lookup.
//!
//! The built-in cases guarantee the app is useful without any external
//! config. The catalog is assembled once at startup and never mutated.

use crate::domain::{Artifact, ArtifactKind, Case, CaseSource, Department, Difficulty, Solution};

/// Lookup by identifier. A linear scan is fine at this cardinality.
pub fn find_case<'a>(cases: &'a [Case], id: &str) -> Option<&'a Case> {
  cases.iter().find(|c| c.id == id)
}

/// The full set of built-in investigation cases.
pub fn builtin_cases() -> Vec<Case> {
  vec![
    Case {
      id: "001".into(),
      title: "Challenge: User Profile Avatar Upload Fails".into(),
      difficulty: Difficulty::Medium,
      department: Department::Ui,
      source: CaseSource::Builtin,
      description: "Users are reporting an intermittent failure when attempting to upload a new profile picture on Safari.".into(),
      symptoms: "When a user navigates to their profile page and attempts to upload a new avatar (JPG or PNG), the upload spinner runs indefinitely. The expected success message never appears, and the avatar does not update. The issue seems to occur primarily on Safari browsers.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Log,
          title: "Console Error Log".into(),
          content: r#"[INFO] User 742 initiated avatar upload.
[INFO] File received: avatar_new.jpg (1.2 MB)
[ERROR] Image processing failed for request id: 8a7b-c9df.
TypeError: Cannot read properties of null (reading 'toBlob') at ImageProcessor.js:112"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Api,
          title: "API Gateway Response".into(),
          content: r#"{
  "error": "Failed to process image",
  "message": "Internal server error during image conversion.",
  "requestId": "8a7b-c9df"
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Note,
          title: "Developer Note".into(),
          content: "The front-end uses the HTML Canvas API to resize images client-side before uploading to save bandwidth. This logic is in `ImageProcessor.js`.".into(),
        },
      ],
      solution: Solution {
        root_cause: "The front-end image processing library is using a canvas method (`toBlob`) that is not fully supported or behaves differently in the tested version of Safari. This leads to a null reference before the image can be converted to a blob for uploading.".into(),
        repro_steps: r#"1. Log in as any user on Safari 15+.
2. Navigate to the user profile page.
3. Click 'Upload New Avatar'.
4. Select a valid JPG or PNG file."#.into(),
        expected_vs_actual: r#"Expected: The new avatar should be displayed, and a "Profile updated" success message should appear.
Actual: The loading spinner continues indefinitely, and the avatar is not updated. A TypeError is visible in the developer console."#.into(),
        severity: "Medium - Affects a core user feature, but has a browser-specific scope.".into(),
        affected_components: vec![
          "UserProfile".into(),
          "ImageUploadService".into(),
          "FrontendImageProcessor.js".into(),
        ],
        test_cases: vec![
          "Verify successful avatar upload on latest Chrome.".into(),
          "Verify successful avatar upload on latest Firefox.".into(),
          "Verify successful avatar upload on latest Safari (after fix).".into(),
          "Verify a user-friendly error message is shown for non-image file uploads.".into(),
          "Verify file size limits are enforced client-side.".into(),
        ],
      },
    },
    Case {
      id: "002".into(),
      title: "Challenge: Checkout Button Unresponsive".into(),
      difficulty: Difficulty::Hard,
      department: Department::Api,
      source: CaseSource::Builtin,
      description: "The \"Complete Purchase\" button in the checkout flow is disabled for some users, blocking them from finishing their orders.".into(),
      symptoms: "After filling out all shipping and payment information, the \"Complete Purchase\" button remains in a disabled state. No network requests are fired upon clicking. This behavior is inconsistent and has been reported by users with items in their cart that have complex product variations (e.g., size, color, and personalization).".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Log,
          title: "Frontend State Log".into(),
          content: r#"[INFO] User 1138 entered checkout flow.
[INFO] Cart validated successfully. Cart ID: cart-a1b2
[WARN] State update for 'isCheckoutReady' did not trigger component re-render. Previous state: false, New state: false.
[DEBUG] Cart items: [{id: 'prod-xyz', variant: 'L-Blue-Custom'}, {id: 'prod-abc'}]"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Api,
          title: "/validateCart API Response".into(),
          content: r#"{
  "cartId": "cart-a1b2",
  "isReadyForCheckout": false,
  "validationErrors": [
    "Variant for product prod-xyz is not fully resolved."
  ]
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Sql,
          title: "Cart Items Table Snippet".into(),
          content: r#"| item_id | product_id | variation_details                       |
|---------|------------|-----------------------------------------|
| 1       | prod-xyz   | {"size":"L", "color":"Blue", "text":"_"} |
| 2       | prod-abc   | null                                    |"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The backend `/validateCart` API service is failing to correctly parse and validate cart items that have complex, nested product variant objects. It returns `isReadyForCheckout: false` incorrectly, which the frontend uses to disable the purchase button.".into(),
        repro_steps: r#"1. Add a standard product to the cart.
2. Add a product with multiple custom variations (e.g., size L, color Blue, custom text).
3. Proceed to the checkout page.
4. Fill in all required fields."#.into(),
        expected_vs_actual: r#"Expected: The 'Complete Purchase' button should become enabled once all fields are valid.
Actual: The 'Complete Purchase' button remains disabled."#.into(),
        severity: "Critical - Directly blocks revenue generation.".into(),
        affected_components: vec![
          "CheckoutFlow (UI)".into(),
          "StateManagement (Frontend)".into(),
          "CartValidationService (Backend)".into(),
        ],
        test_cases: vec![
          "Verify checkout is successful with a single, simple item.".into(),
          "Verify checkout is successful with multiple, simple items.".into(),
          "Verify checkout is successful with a complex, multi-variant item.".into(),
          "Verify checkout is successful with a mix of simple and complex items.".into(),
          "Verify checkout button remains disabled if shipping info is incomplete.".into(),
        ],
      },
    },
    Case {
      id: "003".into(),
      title: "Challenge: Dashboard Widgets Load Slowly".into(),
      difficulty: Difficulty::Easy,
      department: Department::Data,
      source: CaseSource::Builtin,
      description: "The main user dashboard experiences significant delays (5-10 seconds) before all data widgets are fully rendered.".into(),
      symptoms: "Upon logging in, users are presented with a dashboard containing multiple data widgets (e.g., \"Recent Activity\", \"Performance Metrics\"). Each widget shows a loading skeleton for an extended period. Network analysis shows multiple, sequential API calls instead of parallel requests.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Log,
          title: "Performance Log".into(),
          content: r#"[INFO] User 901 authenticated. Loading dashboard...
[PERF] Fetching data for RecentActivityWidget... (Completed in 2.1s)
[PERF] Fetching data for PerformanceMetricsWidget... (Completed in 3.5s)
[PERF] Fetching data for NotificationsWidget... (Completed in 1.8s)
[PERF] Dashboard fully rendered in 7.4s"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Sql,
          title: "Slow Database Query".into(),
          content: r#"EXPLAIN ANALYZE SELECT *
FROM performance_metrics
WHERE user_id = '901' AND period = '30d';

--- QUERY PLAN ---
Seq Scan on performance_metrics (cost=0.00..5678.9) (actual time=1.23..3450.6)
  Filter: (user_id = '901' AND period = '30d')
  Rows Removed by Filter: 999,123"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Note,
          title: "Frontend Code Snippet".into(),
          content: r#"async function loadDashboard() {
  const activity = await fetchActivity();
  const metrics = await fetchMetrics();
  const notifications = await fetchNotifications();
  // ... render components
}"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The performance issue has two causes: 1) The frontend dashboard fetches data for each widget sequentially (one after another) instead of in parallel. 2) The database query for `performance_metrics` is missing an index on `user_id`, causing a slow full table scan.".into(),
        repro_steps: r#"1. Log in as a user with a large amount of historical data.
2. Navigate to the main dashboard.
3. Open the browser's Network tab."#.into(),
        expected_vs_actual: r#"Expected: The dashboard should load all widgets in under 2 seconds. Network requests should be initiated in parallel.
Actual: Dashboard takes over 7 seconds to load. Network tab shows a "waterfall" of requests, each waiting for the previous one to finish."#.into(),
        severity: "High - Negatively impacts user experience for all active users.".into(),
        affected_components: vec![
          "DashboardView (Frontend)".into(),
          "ApiDataFetcher (Frontend)".into(),
          "Database (performance_metrics table)".into(),
        ],
        test_cases: vec![
          "Verify dashboard load time is under 2s for a high-traffic user.".into(),
          "Verify dashboard load time is acceptable for a new user with no data.".into(),
          "Confirm network requests for widgets fire in parallel.".into(),
          "Confirm database query plan for performance_metrics uses a new index.".into(),
        ],
      },
    },
    Case {
      id: "004".into(),
      title: "Mobile: Login Keyboard Overlays Input".into(),
      difficulty: Difficulty::Easy,
      department: Department::Mobile,
      source: CaseSource::Builtin,
      description: "On mobile web browsers, the on-screen keyboard covers the password input field, preventing users from seeing what they are typing.".into(),
      symptoms: "When a user on a mobile device (iOS Safari or Android Chrome) navigates to the login page and taps on the email field, everything works as expected. However, when they tap on the password field, the keyboard slides up and completely obscures the input. The user cannot see the text they are entering.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Ui,
          title: "User Screenshot".into(),
          content: "Description: A screenshot from an iPhone showing the login screen. The keyboard is visible, and its top edge is covering the password field. The email field above it is still visible.".into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "CSS for Form Container".into(),
          content: r#".login-container {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 20px;
  background-color: white;
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Note,
          title: "Viewport Meta Tag".into(),
          content: r#"<meta name="viewport" content="width=device-width, initial-scale=1.0, user-scalable=no">"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The login form's container is using `position: fixed` and `bottom: 0`, which pins it to the bottom of the viewport. When the mobile keyboard appears, it shrinks the visual viewport's height, but the fixed container does not automatically adjust its position relative to the new visible area, causing the overlap.".into(),
        repro_steps: r#"1. Open the application's login page on a mobile device or in a browser's mobile device emulator.
2. Tap the email input field (observe normal behavior).
3. Tap the password input field."#.into(),
        expected_vs_actual: "Expected: The page content should scroll up, keeping the active password input field visible above the keyboard.\nActual: The keyboard appears and covers the password input field, making it impossible to see the typed text.".into(),
        severity: "High - Blocks login for a significant portion of users.".into(),
        affected_components: vec!["Login Page (CSS)".into(), "Global Stylesheet".into()],
        test_cases: vec![
          "Verify password field is visible when focused on iOS Safari.".into(),
          "Verify password field is visible when focused on Android Chrome.".into(),
          "Verify form fields on the registration page do not get covered by the keyboard.".into(),
          "Verify rotating the device from portrait to landscape does not break the input visibility.".into(),
        ],
      },
    },
    Case {
      id: "005".into(),
      title: "Billing: Duplicate Transactions on Double-Tap".into(),
      difficulty: Difficulty::Medium,
      department: Department::Billing,
      source: CaseSource::Builtin,
      description: "Users on slow network connections are sometimes charged twice when they tap the \"Pay Now\" button multiple times.".into(),
      symptoms: "A user attempts to complete a purchase. Due to a slow network, the confirmation screen does not appear immediately. The user taps the \"Pay Now\" button again. A few moments later, they receive two payment confirmation emails and see two identical charges on their credit card statement for the same order.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Log,
          title: "Frontend Action Log".into(),
          content: r#"14:02:10.112 - ACTION: @payment/SUBMIT_PAYMENT_REQUESTED
14:02:10.534 - ACTION: @payment/SUBMIT_PAYMENT_REQUESTED
14:02:11.801 - ACTION: @payment/SUBMIT_PAYMENT_SUCCESS
14:02:12.250 - ACTION: @payment/SUBMIT_PAYMENT_SUCCESS"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Api,
          title: "Server Request Log Snippet".into(),
          content: r#"[2023-10-27T14:02:11Z] POST /api/v1/payments { orderId: 'ord-123', amount: 49.99, ... } -> 201 CREATED
[2023-10-27T14:02:12Z] POST /api/v1/payments { orderId: 'ord-123', amount: 49.99, ... } -> 201 CREATED"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Sql,
          title: "Transactions Table".into(),
          content: r#"| transaction_id | order_id | amount | status    | created_at          |
|----------------|----------|--------|-----------|---------------------|
| txn_abc        | ord-123  | 49.99  | COMPLETED | 2023-10-27 14:02:11 |
| txn_def        | ord-123  | 49.99  | COMPLETED | 2023-10-27 14:02:12 |"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The frontend does not disable the 'Pay Now' button after the initial click, allowing multiple payment requests to be sent before the first one completes. Additionally, the backend payment processing endpoint is not idempotent, meaning it processes each identical request as a new, unique transaction.".into(),
        repro_steps: r#"1. Use browser developer tools to throttle the network connection to "Slow 3G".
2. Proceed to the final checkout page with an item in the cart.
3. Click the "Pay Now" button two or three times in quick succession.
4. Wait for the requests to complete and check transaction records."#.into(),
        expected_vs_actual: "Expected: Only one payment transaction should be created, regardless of how many times the button is clicked.\nActual: Multiple payment transactions are created for the same order, resulting in duplicate charges.".into(),
        severity: "Critical - Causes direct financial harm to customers and operational overhead for refunds.".into(),
        affected_components: vec![
          "CheckoutButton (UI)".into(),
          "PaymentSubmission (State)".into(),
          "PaymentProcessingService (API)".into(),
        ],
        test_cases: vec![
          "Verify 'Pay Now' button becomes disabled and shows a loading state after one click.".into(),
          "Verify that if two identical payment requests are sent, only one transaction is processed (backend idempotency test).".into(),
          "Verify a successful single-tap payment on a fast connection.".into(),
          "Verify a user-friendly error is shown if the payment fails for other reasons (e.g., declined card).".into(),
        ],
      },
    },
    Case {
      id: "006".into(),
      title: "Healthcare: Claim Status Not Updating".into(),
      difficulty: Difficulty::Hard,
      department: Department::Healthcare,
      source: CaseSource::Builtin,
      description: "A patient's insurance claim status remains 'Pending' in the portal, even though the backend provider system shows it as 'Approved'.".into(),
      symptoms: "A claim was submitted five days ago. The insurance provider's internal system correctly updated the claim's status to 'Approved' 24 hours ago. However, in the patient-facing web portal, the same claim still shows a status of 'Pending Review'. The data appears to be out of sync between the source system and the user-facing application.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Sql,
          title: "Provider System DB vs. Portal DB".into(),
          content: r#"--- Provider Claims DB ---
SELECT status FROM provider_claims WHERE claim_id = 'clm-xyz';
-- Result: 'APPROVED'

--- Portal Claims DB ---
SELECT status FROM portal_claim_cache WHERE claim_id = 'clm-xyz';
-- Result: 'PENDING_REVIEW'"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "Data Sync Service Worker Log".into(),
          content: r#"[2023-10-27T08:00:15Z] [INFO] Starting hourly claim status sync job.
[2023-10-27T08:01:05Z] [INFO] Fetched 5,432 updated claims from provider API.
[2023-10-27T08:01:20Z] [ERROR] Job failed. Cannot process message for claim 'clm-xyz'. UnparseableDateException: '2023/10/26 14:30:05'"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Api,
          title: "Provider API Response Snippet (claim clm-xyz)".into(),
          content: r#"{
  "claimId": "clm-xyz",
  "status": "APPROVED",
  "last_updated": "2023/10/26 14:30:05",
  "amount": 500
}"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The external provider's API has changed the date format for the `last_updated` field (from ISO 8601 to `YYYY/MM/DD`). The data synchronization service is not configured to parse this new date format, causing a fatal `UnparseableDateException` when it tries to process the record. This error stops the entire sync job, so no subsequent claims (including the one in question) get updated in the portal's database.".into(),
        repro_steps: r#"1. Identify the data sync job responsible for updating claim statuses.
2. Examine the logs for this job for the last 24 hours.
3. Inspect the raw API response from the provider for a recently updated claim.
4. Compare the date format in the response to the format expected by the sync service's parser."#.into(),
        expected_vs_actual: "Expected: The sync service should successfully parse all incoming data and update the portal database with the 'Approved' status.\nActual: The sync job fails due to an unhandled date format, and the claim status in the portal remains stale.".into(),
        severity: "High - Provides incorrect and critical information to patients, leading to confusion and support calls.".into(),
        affected_components: vec![
          "ClaimDataSyncService".into(),
          "ProviderApiConnector".into(),
          "PortalClaimCache (DB)".into(),
        ],
        test_cases: vec![
          "Verify the sync service correctly handles the new date format `YYYY/MM/DD HH:mm:ss`.".into(),
          "Verify the sync service is resilient and will skip a single malformed record instead of halting the entire job.".into(),
          "Verify claim status updates in the portal within 1 hour of being updated in the provider system.".into(),
          "Verify that if the provider API is down, the portal displays the last known status with a \"last updated\" timestamp.".into(),
        ],
      },
    },
    Case {
      id: "007".into(),
      title: "Auth: Users Logged Out After 5 Minutes".into(),
      difficulty: Difficulty::Medium,
      department: Department::Auth,
      source: CaseSource::Builtin,
      description: "Users are being logged out of the application after only five minutes of inactivity, disrupting their workflow.".into(),
      symptoms: "A user logs into the application, navigates to a complex page, and begins reading. Without any interaction with the page for a few minutes, they then click a link to navigate to another section. Instead of seeing the new page, they are redirected to the login screen, having lost their session.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Api,
          title: "JWT Payload Snippet".into(),
          content: r#"// Decoded JSON Web Token from browser storage
{
  "user_id": "usr_123",
  "email": "test@example.com",
  "iat": 1698364800, // Issued At: 2023-10-27 00:00:00 UTC
  "exp": 1698365100  // Expires At: 2023-10-27 00:05:00 UTC
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "API Gateway Log".into(),
          content: "[401] UNAUTHORIZED - Token expired. Request from user 'usr_123' to GET /api/v2/dashboard. Expiration: 1698365100, Current Time: 1698365105.".into(),
        },
        Artifact {
          kind: ArtifactKind::Note,
          title: "Server Config File (auth.yml)".into(),
          content: r#"jwt:
  secret: "env(JWT_SECRET)"
  expiration_minutes: 5"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The JSON Web Token (JWT) expiration is explicitly configured on the backend authentication service to be only 5 minutes. When the frontend makes an API call after this period, the gateway correctly identifies the token as expired and returns a 401 Unauthorized response, which the frontend interprets as a logout event.".into(),
        repro_steps: r#"1. Log into the application.
2. Note the current time.
3. Do not interact with the application in any way for 6 minutes.
4. Attempt to navigate to a new page or perform an action that requires an API call."#.into(),
        expected_vs_actual: "Expected: The user's session should persist for a reasonable duration (e.g., 60 minutes or more), and they should be able to continue using the app.\nActual: The user is logged out and redirected to the login page.".into(),
        severity: "High - Creates a very poor user experience and can lead to data loss if users are in the middle of a form.".into(),
        affected_components: vec![
          "AuthenticationService (Backend)".into(),
          "ApiGateway (Backend)".into(),
          "GlobalAxiosInterceptor (Frontend)".into(),
        ],
        test_cases: vec![
          "Verify session remains active after 30 minutes of inactivity (after fix).".into(),
          "Verify that logging out explicitly invalidates the session.".into(),
          "Verify that a \"Session Expiring Soon\" warning appears before automatic logout.".into(),
          "Verify that opening the app in a new tab does not invalidate the session in the first tab.".into(),
        ],
      },
    },
    Case {
      id: "008".into(),
      title: "Race Condition: Address Edits Lost in Multi-Tab Use".into(),
      difficulty: Difficulty::Hard,
      department: Department::RaceCondition,
      source: CaseSource::Builtin,
      description: "When a user has their profile open in two tabs, changes made in the first tab are overwritten by changes made in the second tab.".into(),
      symptoms: "A user opens their \"Edit Profile\" page in Tab A and Tab B. They update their Phone Number in Tab A and click save. They then switch to Tab B, update their Shipping Address, and click save. The Phone Number reverts back to its old value, but the Shipping Address is updated correctly.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Api,
          title: "API PUT Request from Tab A".into(),
          content: r#"PUT /api/user/profile
{
  "name": "Jane Doe",
  "phone": "555-123-4567", // <-- New value
  "shippingAddress": "123 Main St"
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Api,
          title: "API PUT Request from Tab B".into(),
          content: r#"PUT /api/user/profile
{
  "name": "Jane Doe",
  "phone": "555-000-0000", // <-- Old, stale value
  "shippingAddress": "456 Oak Ave" // <-- New value
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Note,
          title: "Frontend State Logic".into(),
          content: r#"// On page load, we fetch the full user profile and store it.
const [profile, setProfile] = useState(null);
useEffect(() => { fetchUserProfile().then(setProfile) }, []);

// On save, we send the entire profile object back.
const handleSave = () => {
  updateUserProfile(profile);
}"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "A classic race condition. The application uses a `PUT` request that replaces the entire user profile object. Both tabs load the same initial state. When Tab A saves, it sends the whole object with the updated phone number. When Tab B saves, it sends *its* version of the whole object, which has the new address but the *old* phone number it loaded initially, thus overwriting the change from Tab A.".into(),
        repro_steps: r#"1. Log in and navigate to the "Edit Profile" page.
2. Open the same "Edit Profile" page in a second browser tab.
3. In the first tab, change the phone number and save.
4. In the second tab, change the shipping address and save.
5. Refresh the first tab and observe that the phone number has reverted to its original value."#.into(),
        expected_vs_actual: "Expected: Both the phone number and shipping address updates should be saved correctly, reflecting both changes.\nActual: The second save operation overwrites the data from the first, causing data loss.".into(),
        severity: "Medium - Can cause frustrating data loss, but requires an unusual user workflow.".into(),
        affected_components: vec!["ProfileEditPage (Frontend)".into(), "UserProfileService (API)".into()],
        test_cases: vec![
          "Verify that updating one field does not affect other fields when using multiple tabs.".into(),
          "Verify that a `PATCH` request is used to send only the changed fields, not the entire object.".into(),
          "Verify optimistic locking is implemented (e.g., using ETags or a version number) to prevent overwriting more recent data.".into(),
          "Verify normal, single-tab profile editing works as expected.".into(),
        ],
      },
    },
    Case {
      id: "009".into(),
      title: "Performance: Report Download Takes 90s on Firefox".into(),
      difficulty: Difficulty::Medium,
      department: Department::Performance,
      source: CaseSource::Builtin,
      description: "Generating and downloading a large CSV report causes the browser to hang for over a minute, especially on Firefox.".into(),
      symptoms: "A user in the admin panel clicks \"Download Full Report\". The API call to fetch the report data completes quickly (under 3 seconds), but the browser UI freezes and becomes completely unresponsive for a long time afterward. The download eventually starts, but the user experience is very poor. The issue is significantly more pronounced on Firefox than on Chrome.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Network,
          title: "Network Tab Analysis".into(),
          content: r#"Request: GET /api/reports/full-data
Status: 200 OK
Time: 2.8s
Size: 15.2 MB
---
Browser UI becomes unresponsive for ~88 seconds after this request finishes."#.into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "Browser Performance Profile".into(),
          content: "Flame graph shows a single long task taking 88,000ms. The function responsible is `generateCSVString` which contains a synchronous `for` loop iterating over 200,000 records.".into(),
        },
        Artifact {
          kind: ArtifactKind::Note,
          title: "Code Snippet from reportGenerator.js".into(),
          content: r#"function generateAndDownload(jsonData) {
  let csv = 'ID,Name,Date,Amount\n'; // header row
  // This loop blocks the main thread
  for (const item of jsonData) {
    csv += `${item.id},${item.name},${item.date},${item.amount}\n`;
  }

  // Trigger download...
}"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The client-side JavaScript code is synchronously processing a very large JSON dataset (200,000+ records) on the browser's main thread to generate a CSV string. This long-running, blocking operation freezes the UI until it completes. Different browser JavaScript engines have varying performance, explaining why it's worse on Firefox.".into(),
        repro_steps: r#"1. Log into the admin panel as a user with access to a large dataset.
2. Open the browser's developer tools to the Performance tab.
3. Click "Download Full Report" and start a performance profile.
4. Observe the long task that blocks the main thread after the data has been fetched."#.into(),
        expected_vs_actual: "Expected: The UI should remain responsive while the report is being prepared, possibly showing a progress indicator. The download should start promptly.\nActual: The entire browser tab freezes for over a minute, creating the impression that the application has crashed.".into(),
        severity: "High - Makes a core feature unusable and appears as a major application failure.".into(),
        affected_components: vec!["ReportGenerator (Frontend)".into(), "AdminDashboard (UI)".into()],
        test_cases: vec![
          "Verify UI remains responsive during large report generation (after moving logic to a Web Worker).".into(),
          "Verify the downloaded CSV contains all the correct data.".into(),
          "Verify a loading indicator is shown to the user during the CSV generation process.".into(),
          "Verify downloading a small report (e.g., < 1000 rows) is still fast and does not freeze the UI.".into(),
        ],
      },
    },
    Case {
      id: "010".into(),
      title: "Security: Password Reset Email Enumeration".into(),
      difficulty: Difficulty::Easy,
      department: Department::Security,
      source: CaseSource::Builtin,
      description: "The 'Forgot Password' page reveals whether an email address is registered with the system, allowing for account enumeration.".into(),
      symptoms: "On the password reset page, if a user enters an email address that exists in the database, they receive the message 'Password reset link sent.' If they enter an email address that does *not* exist, they receive a different message: 'No account found with that email address.' This allows an attacker to discover valid user emails.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Ui,
          title: "Response for Registered Email".into(),
          content: "A screenshot showing the form with the message: \"Password reset link sent to test@example.com.\"".into(),
        },
        Artifact {
          kind: ArtifactKind::Ui,
          title: "Response for Unregistered Email".into(),
          content: "A screenshot showing the form with the error message: \"No account found with that email address.\"".into(),
        },
        Artifact {
          kind: ArtifactKind::Api,
          title: "API Responses".into(),
          content: r#"// Request for 'registered@example.com'
{ "status": "success", "message": "Email sent." }

// Request for 'unregistered@example.com'
{ "status": "error", "message": "User not found." }"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "The backend API provides distinct responses based on whether the email exists in the user database. The frontend then displays these different messages to the user. This is a common information disclosure vulnerability known as user enumeration.".into(),
        repro_steps: r#"1. Navigate to the "Forgot Password" page.
2. Enter an email address known to be registered. Observe the success message.
3. Enter an email address known to be unregistered (e.g., a random string). Observe the error message.
4. The difference in response confirms the vulnerability."#.into(),
        expected_vs_actual: "Expected: The application should return a generic, non-committal message for both registered and unregistered emails to prevent information leakage.\nActual: The application explicitly confirms the existence or non-existence of an account for the given email.".into(),
        severity: "Medium - Does not directly compromise accounts but provides valuable information for attackers.".into(),
        affected_components: vec!["PasswordReset (API)".into(), "ForgotPassword (UI)".into()],
        test_cases: vec![
          "Verify the same generic message ('If an account with that email exists, a reset link has been sent.') is shown for both registered and unregistered emails.".into(),
          "Verify a registered user correctly receives a password reset email.".into(),
          "Verify an unregistered email address does not trigger any email to be sent.".into(),
          "Verify response times are similar for both valid and invalid requests to prevent timing attacks.".into(),
        ],
      },
    },
    Case {
      id: "011".into(),
      title: "Test Data: Search Results Broken by Test Data Pollution".into(),
      difficulty: Difficulty::Medium,
      department: Department::TestData,
      source: CaseSource::Builtin,
      description: "Production search results are cluttered with irrelevant test entries, making it difficult for real users to find what they're looking for.".into(),
      symptoms: "When a user searches for a common term like \"shirt\" on the e-commerce site, the first page of results includes items named \"DO NOT USE - Test Shirt\", \"QA Automation Product - Adam\", and \"DELETE ME\". This test data pushes legitimate products down the page and creates a confusing, unprofessional user experience.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Ui,
          title: "Search Results Screenshot".into(),
          content: "A screenshot of the search results page showing a mix of real products and products with names clearly indicating they are for testing purposes.".into(),
        },
        Artifact {
          kind: ArtifactKind::Sql,
          title: "Products Table Snippet".into(),
          content: r#"| product_name                      | is_active | created_by    |
|-----------------------------------|-----------|---------------|
| Classic Blue T-Shirt              | true      | system        |
| QA Automation Product - Adam      | true      | qa_service_acct |
| DELETE ME                         | true      | qa_service_acct |
| Premium Silk Scarf                | true      | system        |"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "E2E Test Runner Log".into(),
          content: r#"[INFO] Running test suite 'SearchAndCheckout'.
[INFO] Creating prerequisite product data...
[INFO] API CALL: POST /api/products { name: 'QA Automation Product - Adam', ... }
[INFO] Product created successfully.
[PASS] Test 'userCanSearchForProduct' completed.
// No cleanup steps are logged after the test suite finishes."#.into(),
        },
      ],
      solution: Solution {
        root_cause: "Automated end-to-end tests are creating data in a production-like environment (e.g., staging) but are not cleaning up the test data after the tests complete. This polluted data is then either being indexed for production search or the staging database is being promoted to production without proper sanitization, leaking test artifacts to real users.".into(),
        repro_steps: r#"1. Execute the automated E2E test suite against the staging environment.
2. After the tests complete, inspect the `products` table in the staging database.
3. Observe that the newly created test products still exist.
4. Perform a search on the production website and find the same test products."#.into(),
        expected_vs_actual: "Expected: The production search should only return legitimate, user-facing products. Test data should be isolated and never visible to end users.\nActual: Test data is being indexed and displayed in production search results, degrading the quality of the service.".into(),
        severity: "High - Directly impacts the core user experience, erodes user trust, and can affect sales.".into(),
        affected_components: vec![
          "Search Indexer".into(),
          "E2E Test Suite".into(),
          "DB Sanitization Process".into(),
        ],
        test_cases: vec![
          "Verify that test data created by automation is deleted at the end of the test run.".into(),
          "Verify the production search query explicitly filters out test data (e.g., `WHERE is_test_account = false`).".into(),
          "Verify that the database cloning/sanitization process removes all data created by known test accounts.".into(),
          "Verify that manual testers have a clear process for creating and cleaning up their own test data.".into(),
        ],
      },
    },
    Case {
      id: "012".into(),
      title: "Regression: New Notification Banner Breaks Nav Menu".into(),
      difficulty: Difficulty::Easy,
      department: Department::Regression,
      source: CaseSource::Builtin,
      description: "A new site-wide notification banner, added in the latest release, now appears on top of the main navigation's dropdown menu, making it unusable.".into(),
      symptoms: "When a user clicks on a top-level navigation item like \"Products\" or \"Account\", the dropdown menu appears as expected, but it is rendered *underneath* the new promotional banner at the top of the page. This makes the menu items obscured and unclickable.".into(),
      artifacts: vec![
        Artifact {
          kind: ArtifactKind::Ui,
          title: "Screenshot of the Issue".into(),
          content: "A screenshot showing the top of the website. A yellow promotional banner is visible. The \"Products\" navigation item is active, and its dropdown menu is partially visible but tucked behind the yellow banner.".into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "CSS for Notification Banner".into(),
          content: r#"/* new-banner.css */
.notification-banner {
  position: relative;
  z-index: 1000;
  background-color: #FFD700;
}"#.into(),
        },
        Artifact {
          kind: ArtifactKind::Log,
          title: "CSS for Navigation Dropdown".into(),
          content: r#"/* header.css */
.nav-dropdown {
  position: absolute;
  z-index: 999;
  background-color: #FFFFFF;
  border: 1px solid #CCC;
}"#.into(),
        },
      ],
      solution: Solution {
        root_cause: "A CSS `z-index` stacking context issue. The newly introduced notification banner was given a `z-index` of 1000, while the existing navigation dropdown menu has a lower `z-index` of 999. In the browser's rendering engine, elements with a higher `z-index` are stacked on top of elements with a lower `z-index`, causing the banner to cover the menu.".into(),
        repro_steps: r#"1. Navigate to the homepage.
2. Hover over or click on any main navigation item that has a dropdown menu.
3. Observe the dropdown menu appearing behind the notification banner."#.into(),
        expected_vs_actual: "Expected: The navigation dropdown menu should appear on top of all other page content, including the new banner, so it is fully visible and clickable.\nActual: The dropdown menu is hidden behind the banner.".into(),
        severity: "Critical - Blocks access to primary navigation, preventing users from accessing key parts of the application.".into(),
        affected_components: vec!["SiteHeader (CSS)".into(), "NotificationBanner (CSS)".into()],
        test_cases: vec![
          "Verify the navigation dropdown appears on top of the notification banner.".into(),
          "Verify the notification banner can still be closed or interacted with.".into(),
          "Verify other absolutely positioned elements (like modals or tooltips) are not affected by the banner.".into(),
          "Check cross-browser compatibility for the z-index fix (Chrome, Firefox, Safari).".into(),
        ],
      },
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_bank_has_twelve_cases_with_unique_ids() {
    let cases = builtin_cases();
    assert_eq!(cases.len(), 12);
    let mut ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12);
  }

  #[test]
  fn find_case_by_id() {
    let cases = builtin_cases();
    let c = find_case(&cases, "001").expect("case 001 exists");
    assert_eq!(c.difficulty, Difficulty::Medium);
    assert_eq!(c.department, Department::Ui);
    assert!(c.solution.root_cause.contains("canvas method (`toBlob`)"));
  }

  #[test]
  fn find_case_unknown_id_is_none() {
    let cases = builtin_cases();
    assert!(find_case(&cases, "999").is_none());
  }

  #[test]
  fn every_case_carries_artifacts_and_a_full_solution() {
    for c in builtin_cases() {
      assert!(!c.artifacts.is_empty(), "case {} has no artifacts", c.id);
      assert!(!c.solution.root_cause.is_empty(), "case {} missing root cause", c.id);
      assert!(!c.solution.test_cases.is_empty(), "case {} missing test cases", c.id);
    }
  }
}
