use chrono::NaiveDateTime;

pub fn render_index(now: NaiveDateTime) -> String {
    INDEX_HTML
        .replace("{{FULL_DATE}}", &now.format("%A, %B %-d, %Y").to_string())
        .replace("{{TIME}}", &now.format("%H:%M:%S").to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Attendance</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f6;
      --bg-2: #cfe8e6;
      --ink: #22302e;
      --accent: #0f9b8e;
      --accent-2: #2f4858;
      --late: #b98a00;
      --absent: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1ee 60%, #f2f7f4 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6a68;
      font-size: 1rem;
    }

    .clock {
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      text-align: right;
    }

    .clock .label {
      font-size: 0.85rem;
      color: #7a8684;
    }

    .clock .time {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
      font-variant-numeric: tabular-nums;
    }

    .week-bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .week-bar h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .nav {
      display: flex;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      background: var(--accent-2);
      color: white;
      box-shadow: 0 8px 18px rgba(47, 72, 88, 0.25);
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-today {
      background: var(--accent);
      box-shadow: 0 8px 18px rgba(15, 155, 142, 0.3);
    }

    .day-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
    }

    .day-card {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.1);
      border-radius: 16px;
      padding: 12px 6px;
      display: grid;
      justify-items: center;
      gap: 4px;
    }

    .day-card.today {
      border: 2px solid var(--accent);
      background: #e5f6f3;
      box-shadow: 0 10px 20px rgba(15, 155, 142, 0.18);
    }

    .day-card .name {
      font-size: 0.8rem;
      font-weight: 600;
      color: #7a8684;
    }

    .day-card.weekend .name,
    .day-card.weekend .num {
      color: var(--absent);
    }

    .day-card .num {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .day-card .badge {
      font-size: 0.7rem;
      font-weight: 600;
      border-radius: 8px;
      padding: 2px 8px;
    }

    .badge.today-badge {
      background: #c9eee8;
      color: var(--accent);
    }

    .badge.weekend-badge {
      background: #f8ddd7;
      color: var(--absent);
    }

    .dot {
      width: 8px;
      height: 8px;
      border-radius: 999px;
      opacity: 0;
    }

    .dot.present { background: var(--accent); opacity: 1; }
    .dot.late { background: var(--late); opacity: 1; }
    .dot.absent { background: var(--absent); opacity: 1; }

    .table-card {
      background: white;
      border-radius: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      overflow: hidden;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th {
      text-align: left;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b9694;
      padding: 12px 16px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    td {
      padding: 12px 16px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.06);
      font-size: 0.95rem;
    }

    tr.today-row {
      background: #e5f6f3;
    }

    td .sub {
      display: block;
      font-size: 0.78rem;
      color: #8b9694;
    }

    .pill {
      display: inline-block;
      border-radius: 999px;
      padding: 3px 12px;
      font-size: 0.8rem;
      font-weight: 600;
    }

    .pill.present { background: #d9f2ed; color: var(--accent); }
    .pill.late { background: #f7ecca; color: var(--late); }
    .pill.absent { background: #f8ddd7; color: var(--absent); }

    .empty-row td {
      text-align: center;
      color: #8b9694;
      padding: 36px 16px;
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b9694;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.hours {
      color: var(--accent);
    }

    .status {
      font-size: 0.95rem;
      color: #6b7674;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--absent);
    }

    .hint {
      margin: 0;
      color: #6f7a78;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 26px 18px;
      }
      .day-grid {
        grid-template-columns: repeat(4, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Weekly Attendance</h1>
        <p class="subtitle">Check-ins, check-outs and hours for the selected week.</p>
      </div>
      <div class="clock">
        <div class="label" id="full-date">{{FULL_DATE}}</div>
        <div class="time" id="clock-time">{{TIME}}</div>
      </div>
    </header>

    <section class="week-bar">
      <h2 id="week-label">Loading week...</h2>
      <div class="nav">
        <button type="button" id="prev-week">&larr; Prev</button>
        <button type="button" class="btn-today" id="today-btn">Today</button>
        <button type="button" id="next-week">Next &rarr;</button>
      </div>
    </section>

    <section class="day-grid" id="day-grid"></section>

    <section class="table-card">
      <table>
        <thead>
          <tr>
            <th>Date</th>
            <th>Check In</th>
            <th>Check Out</th>
            <th>Hours</th>
            <th>Status</th>
          </tr>
        </thead>
        <tbody id="attendance-body"></tbody>
      </table>
    </section>

    <section class="summary">
      <div class="stat">
        <span class="label">Total hours</span>
        <span class="value hours" id="total-hours">0.0</span>
      </div>
      <div class="stat">
        <span class="label">On time</span>
        <span class="value" id="on-time-count">0</span>
      </div>
      <div class="stat">
        <span class="label">Late</span>
        <span class="value" id="late-count">0</span>
      </div>
      <div class="stat">
        <span class="label">Absent</span>
        <span class="value" id="absent-count">0</span>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Sundays are not tracked. Weeks run Monday to Sunday; the week number follows ISO-8601.</p>
  </main>

  <script>
    const weekLabelEl = document.getElementById('week-label');
    const dayGridEl = document.getElementById('day-grid');
    const tableBodyEl = document.getElementById('attendance-body');
    const statusEl = document.getElementById('status');
    const fullDateEl = document.getElementById('full-date');
    const clockTimeEl = document.getElementById('clock-time');

    let offset = 0;
    let requestSeq = 0;
    let weekData = null;

    const pad2 = (value) => String(value).padStart(2, '0');

    const parseISO = (value) => {
      const [year, month, day] = value.split('-').map(Number);
      return new Date(year, month - 1, day);
    };

    const fmtShort = (value) =>
      parseISO(value).toLocaleDateString('en-US', { month: 'short', day: 'numeric' });

    const fmtMedium = (value) =>
      parseISO(value).toLocaleDateString('en-US', { month: 'short', day: 'numeric', year: 'numeric' });

    const longWeekday = (value) =>
      parseISO(value).toLocaleDateString('en-US', { weekday: 'long' });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateClock = () => {
      const now = new Date();
      clockTimeEl.textContent = `${pad2(now.getHours())}:${pad2(now.getMinutes())}:${pad2(now.getSeconds())}`;
      fullDateEl.textContent = now.toLocaleDateString('en-US', {
        weekday: 'long', year: 'numeric', month: 'long', day: 'numeric'
      });
    };

    const statusPill = (status) => {
      if (status === 'present') {
        return '<span class="pill present">On Time</span>';
      }
      if (status === 'late') {
        return '<span class="pill late">Late</span>';
      }
      return '<span class="pill absent">Absent</span>';
    };

    const renderDayCards = () => {
      const byDate = new Map(weekData.records.map((record) => [record.date, record]));
      dayGridEl.innerHTML = weekData.days
        .map((slot) => {
          const classes = ['day-card'];
          if (slot.is_today) classes.push('today');
          if (!slot.tracked) classes.push('weekend');

          const record = byDate.get(slot.date);
          let footer;
          if (!slot.tracked) {
            footer = '<span class="badge weekend-badge">Weekend</span>';
          } else if (slot.is_today) {
            footer = '<span class="badge today-badge">Today</span>';
          } else {
            footer = `<span class="dot ${record ? record.status : ''}"></span>`;
          }

          return `
            <div class="${classes.join(' ')}">
              <span class="name">${slot.weekday}</span>
              <span class="num">${parseISO(slot.date).getDate()}</span>
              ${footer}
            </div>
          `;
        })
        .join('');
    };

    const renderTable = () => {
      if (!weekData.records.length) {
        tableBodyEl.innerHTML =
          '<tr class="empty-row"><td colspan="5">No attendance records found for this week.</td></tr>';
        return;
      }

      tableBodyEl.innerHTML = weekData.records
        .map((record) => `
          <tr class="${record.is_today ? 'today-row' : ''}">
            <td>${fmtMedium(record.date)}<span class="sub">${longWeekday(record.date)}</span></td>
            <td>${record.check_in}</td>
            <td>${record.check_out}</td>
            <td>${record.working_hours}</td>
            <td>${statusPill(record.status)}</td>
          </tr>
        `)
        .join('');
    };

    const animateCounter = (id, target, decimals) => {
      const element = document.getElementById(id);
      const start = parseFloat(element.textContent) || 0;
      const goal = parseFloat(target);
      const duration = 600;
      const startTime = performance.now();

      const step = (timestamp) => {
        const progress = Math.min((timestamp - startTime) / duration, 1);
        const value = start + (goal - start) * progress;
        element.textContent = decimals ? value.toFixed(decimals) : String(Math.round(value));
        if (progress < 1) {
          requestAnimationFrame(step);
        } else {
          element.textContent = decimals ? goal.toFixed(decimals) : String(goal);
        }
      };

      requestAnimationFrame(step);
    };

    const renderSummary = () => {
      const summary = weekData.summary;
      animateCounter('total-hours', summary.total_hours, 1);
      animateCounter('on-time-count', summary.on_time_count, 0);
      animateCounter('late-count', summary.late_count, 0);
      animateCounter('absent-count', summary.absent_count, 0);
    };

    const renderWeek = () => {
      const win = weekData.window;
      weekLabelEl.textContent =
        `Week ${win.week_number} (${fmtShort(win.monday)} - ${fmtShort(win.sunday)}, ${win.year})`;
      renderDayCards();
      renderTable();
      renderSummary();
    };

    const loadWeek = async () => {
      const seq = ++requestSeq;
      setStatus('Loading attendance...', 'info');
      tableBodyEl.innerHTML =
        '<tr class="empty-row"><td colspan="5">Loading attendance data...</td></tr>';

      const res = await fetch(`/api/week?offset=${offset}`);
      if (!res.ok) {
        throw new Error('Unable to load attendance data');
      }
      const data = await res.json();
      if (seq !== requestSeq) {
        return; // a newer navigation superseded this response
      }
      weekData = data;
      renderWeek();
      setStatus('', '');
    };

    const navigate = (nextOffset) => {
      offset = nextOffset;
      loadWeek().catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('prev-week').addEventListener('click', () => navigate(offset - 1));
    document.getElementById('next-week').addEventListener('click', () => navigate(offset + 1));
    document.getElementById('today-btn').addEventListener('click', () => navigate(0));

    updateClock();
    setInterval(updateClock, 1000);
    navigate(0);
  </script>
</body>
</html>
"#;
